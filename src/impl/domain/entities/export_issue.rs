use std::fmt;

use super::document::Document;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    DocumentStatus,
    MissingField,
    InvalidDate,
    DateOutOfRange,
    /// Also used for negative and over-limit amounts, not only zero ones.
    AmountZero,
    LengthOver,
    InvalidTaxCategory,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IssueField {
    Date,
    Vendor,
    AccountTitle,
    TaxCategory,
    AmountIn,
    AmountOut,
    Description,
    Status,
}

/// One data-quality finding of an export validation run. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportIssue {
    pub code: IssueCode,
    pub severity: IssueSeverity,
    pub message: String,
    pub document_id: String,
    pub document_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<IssueField>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueSummary {
    pub errors: usize,
    pub warnings: usize,
}

// --

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::DocumentStatus => "document_status",
            IssueCode::MissingField => "missing_field",
            IssueCode::InvalidDate => "invalid_date",
            IssueCode::DateOutOfRange => "date_out_of_range",
            IssueCode::AmountZero => "amount_zero",
            IssueCode::LengthOver => "length_over",
            IssueCode::InvalidTaxCategory => "invalid_tax_category",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IssueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueField::Date => "date",
            IssueField::Vendor => "vendor",
            IssueField::AccountTitle => "account_title",
            IssueField::TaxCategory => "tax_category",
            IssueField::AmountIn => "amount_in",
            IssueField::AmountOut => "amount_out",
            IssueField::Description => "description",
            IssueField::Status => "status",
        }
    }
}

impl ExportIssue {
    pub fn error(code: IssueCode, document: &Document, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: IssueSeverity::Error,
            message: message.into(),
            document_id: document.id.clone(),
            document_name: document.original_name.clone(),
            entry_id: None,
            field: None,
        }
    }

    pub fn warning(code: IssueCode, document: &Document, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            ..Self::error(code, document, message)
        }
    }

    pub fn for_entry(mut self, entry_id: &str) -> Self {
        self.entry_id = Some(entry_id.to_string());
        self
    }

    pub fn on_field(mut self, field: IssueField) -> Self {
        self.field = Some(field);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

impl IssueSummary {
    pub fn of(issues: &[ExportIssue]) -> Self {
        issues
            .iter()
            .fold(IssueSummary::default(), |mut summary, issue| {
                match issue.severity {
                    IssueSeverity::Error => summary.errors += 1,
                    IssueSeverity::Warning => summary.warnings += 1,
                }
                summary
            })
    }
}
