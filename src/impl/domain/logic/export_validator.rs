use std::collections::HashSet;

use crate::entities::{
    DateRange, Document, DocumentStatus, Entry, ExportConfig, ExportIssue, ExportRow, IssueCode,
    IssueField,
};

use super::{issue_messages as msg, utils::parse_calendar_date};

/// Rows eligible for export plus every issue found on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub range: DateRange,
    pub rows: Vec<ExportRow>,
    pub issues: Vec<ExportIssue>,
}

/// Checks documents against the export rules for one date range.
///
/// Validation is pure: it reads the documents, never mutates them, and keeps
/// no state between calls.
pub struct ExportValidator<'a> {
    config: &'a ExportConfig,
    range: DateRange,
}

enum EntryOutcome {
    Row(ExportRow),
    Issues(Vec<ExportIssue>),
    Skipped,
}

impl<'a> ExportValidator<'a> {
    pub fn new(config: &'a ExportConfig, range: DateRange) -> Self {
        Self { config, range }
    }

    pub fn validate(&self, documents: &[Document]) -> ValidationResult {
        let mut rows = Vec::new();
        let mut issues = Vec::new();
        // Documents already reported as not confirmed during this run.
        let mut reported_documents: HashSet<&str> = HashSet::new();

        for document in documents {
            for entry in &document.entries {
                match self.check_entry(document, entry, &mut reported_documents) {
                    EntryOutcome::Row(row) => rows.push(row),
                    EntryOutcome::Issues(entry_issues) => issues.extend(entry_issues),
                    EntryOutcome::Skipped => {}
                }
            }
        }

        tracing::debug!(
            from = %self.range.from(),
            to = %self.range.to(),
            documents = documents.len(),
            rows = rows.len(),
            issues = issues.len(),
            "export validation finished"
        );

        ValidationResult {
            range: self.range,
            rows,
            issues,
        }
    }

    fn check_entry<'d>(
        &self,
        document: &'d Document,
        entry: &Entry,
        reported_documents: &mut HashSet<&'d str>,
    ) -> EntryOutcome {
        let entry_issue = |code: IssueCode, field: IssueField, message: String| {
            ExportIssue::error(code, document, message)
                .for_entry(&entry.id)
                .on_field(field)
        };

        // Date checks short-circuit everything else.
        let raw_date = match entry.date.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d,
            _ => {
                return EntryOutcome::Issues(vec![entry_issue(
                    IssueCode::MissingField,
                    IssueField::Date,
                    msg::date_missing(),
                )]);
            }
        };
        let Some(date) = parse_calendar_date(raw_date) else {
            return EntryOutcome::Issues(vec![entry_issue(
                IssueCode::InvalidDate,
                IssueField::Date,
                msg::date_invalid(raw_date),
            )]);
        };
        if !self.range.contains(date) {
            return EntryOutcome::Issues(vec![ExportIssue::warning(
                IssueCode::DateOutOfRange,
                document,
                msg::date_out_of_range(raw_date),
            )
            .for_entry(&entry.id)
            .on_field(IssueField::Date)]);
        }

        // Reported once per document, on the first in-range entry.
        if document.status != DocumentStatus::Confirmed {
            if !reported_documents.insert(document.id.as_str()) {
                return EntryOutcome::Skipped;
            }
            return EntryOutcome::Issues(vec![ExportIssue::error(
                IssueCode::DocumentStatus,
                document,
                msg::document_not_confirmed(&document.original_name),
            )
            .on_field(IssueField::Status)]);
        }

        // Field checks are independent of each other; collect all of them.
        let vendor = entry.vendor.trim();
        let account_title = entry.account_title.trim();
        let description = entry.description.as_deref().unwrap_or_default().trim();
        let (amount_in, amount_out) = (entry.amount_in, entry.amount_out);
        let max_amount = self.config.max_amount;
        let mut errors = Vec::new();

        if vendor.is_empty() {
            errors.push(entry_issue(
                IssueCode::MissingField,
                IssueField::Vendor,
                msg::vendor_missing(),
            ));
        } else if vendor.chars().count() > self.config.max_vendor_length {
            errors.push(entry_issue(
                IssueCode::LengthOver,
                IssueField::Vendor,
                msg::vendor_too_long(self.config.max_vendor_length),
            ));
        }
        if account_title.is_empty() {
            errors.push(entry_issue(
                IssueCode::MissingField,
                IssueField::AccountTitle,
                msg::account_title_missing(),
            ));
        }
        if entry.tax_category.is_none() {
            errors.push(entry_issue(
                IssueCode::InvalidTaxCategory,
                IssueField::TaxCategory,
                msg::tax_category_invalid(),
            ));
        }
        if amount_in == 0 && amount_out == 0 {
            errors.push(entry_issue(
                IssueCode::AmountZero,
                IssueField::AmountOut,
                msg::amount_missing(),
            ));
        }
        if amount_in < 0 {
            errors.push(entry_issue(
                IssueCode::AmountZero,
                IssueField::AmountIn,
                msg::amount_in_negative(),
            ));
        }
        if amount_out < 0 {
            errors.push(entry_issue(
                IssueCode::AmountZero,
                IssueField::AmountOut,
                msg::amount_out_negative(),
            ));
        }
        if amount_in > max_amount {
            errors.push(entry_issue(
                IssueCode::AmountZero,
                IssueField::AmountIn,
                msg::amount_in_over_limit(max_amount),
            ));
        }
        if amount_out > max_amount {
            errors.push(entry_issue(
                IssueCode::AmountZero,
                IssueField::AmountOut,
                msg::amount_out_over_limit(max_amount),
            ));
        }
        if description.chars().count() > self.config.max_description_length {
            errors.push(entry_issue(
                IssueCode::LengthOver,
                IssueField::Description,
                msg::description_too_long(self.config.max_description_length),
            ));
        }

        match entry.tax_category {
            Some(tax_category) if errors.is_empty() => EntryOutcome::Row(ExportRow {
                date,
                amount_in,
                amount_out,
                vendor: vendor.to_string(),
                account_title: account_title.to_string(),
                tax_category,
                description: description.to_string(),
                document_id: document.id.clone(),
            }),
            _ => EntryOutcome::Issues(errors),
        }
    }
}
