use super::export_issue::{ExportIssue, IssueSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvDraftOptions {
    pub include_header: bool,
}

impl Default for CsvDraftOptions {
    fn default() -> Self {
        Self {
            include_header: true,
        }
    }
}

/// CSV text plus every issue found while building it. Having issues does not
/// make the draft invalid; callers decide whether to block on them.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDraft {
    pub csv: String,
    pub issues: Vec<ExportIssue>,
}

impl CsvDraft {
    pub fn summary(&self) -> IssueSummary {
        IssueSummary::of(&self.issues)
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ExportIssue::is_error)
    }
}

pub const SHIFT_JIS_CSV_CONTENT_TYPE: &str = "text/csv; charset=Shift_JIS";

/// Shift_JIS encoded CSV ready to be served as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}
