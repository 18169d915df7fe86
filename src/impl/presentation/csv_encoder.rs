use crate::entities::{ExportRow, CSV_COLUMNS};

impl ExportRow {
    /// Cells in `CSV_COLUMNS` order. Zero amounts render as empty cells.
    pub fn cells(&self) -> Vec<String> {
        let amount = |a: i64| if a > 0 { a.to_string() } else { String::new() };
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            amount(self.amount_in),
            amount(self.amount_out),
            self.vendor.clone(),
            self.account_title.clone(),
            self.tax_category.as_str().to_string(),
            self.description.clone(),
            self.document_id.clone(),
        ]
    }
}

/// Quote a cell only if it contains a comma, double quote or newline;
/// embedded quotes are doubled.
fn encode_cell(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Cells joined by commas, rows joined by `\n`, no trailing newline.
pub fn to_csv<R, C>(rows: R) -> String
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| encode_cell(cell.as_ref()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) struct CsvDraftPrinter;

impl CsvDraftPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print(&self, rows: &[ExportRow], include_header: bool) -> String {
        let header: Option<Vec<String>> =
            include_header.then(|| CSV_COLUMNS.iter().map(|c| c.to_string()).collect());
        to_csv(header.into_iter().chain(rows.iter().map(ExportRow::cells)))
    }
}
