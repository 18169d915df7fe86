use chrono::NaiveDate;

use super::document::TaxCategory;

/// Fixed column order of the export CSV.
pub const CSV_COLUMNS: [&str; 8] = [
    "date",
    "amount_in",
    "amount_out",
    "vendor",
    "account_title",
    "tax_category",
    "description",
    "document_id",
];

/// An entry that passed every export rule, with text fields already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub amount_in: i64,
    pub amount_out: i64,
    pub vendor: String,
    pub account_title: String,
    pub tax_category: TaxCategory,
    pub description: String,
    pub document_id: String,
}
