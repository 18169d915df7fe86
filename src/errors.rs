use chrono::NaiveDate;
use thiserror::Error;

use crate::entities::DocumentStatus;

/// Request-level failures. Data-quality problems found during validation are
/// reported as `ExportIssue`s instead and never surface here.
#[derive(Debug, Error)]
pub enum ExportError {
    // IO-related.
    #[error("Error reading file: {0}")]
    Read(#[from] std::io::Error),

    // Parsing-related.
    #[error("Invalid documents JSON: {0}")]
    InvalidDocumentsJson(#[from] serde_json::Error),
    #[error("Invalid export configuration (invalid RON format): {0}")]
    InvalidExportConfig(#[from] ron::error::SpannedError),

    // Date range.
    #[error("Date range bound '{bound}' is missing.")]
    MissingDateRange { bound: &'static str },
    #[error("Invalid date for range bound '{bound}': '{value}'.")]
    InvalidDateRange { bound: &'static str, value: String },
    #[error("Invalid date range: from ({from}) is after to ({to}).")]
    ReversedDateRange { from: NaiveDate, to: NaiveDate },

    // Export.
    #[error("Export blocked: {count} integrity issue(s) must be resolved first.")]
    ExportBlockedByIssues { count: usize },
    #[error("Character '{character}' cannot be represented in Shift_JIS.")]
    UnmappableCharacter { character: char },

    // Documents.
    #[error("Document not found: '{id}'.")]
    DocumentNotFound { id: String },
    #[error("Document '{id}' cannot move from '{from}' to '{to}'.")]
    InvalidStatusTransition {
        id: String,
        from: DocumentStatus,
        to: DocumentStatus,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;
