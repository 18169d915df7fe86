use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Draft,
    InReview,
    Confirmed,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSource {
    Amazon,
    Rakuten,
    Manual,
    #[default]
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
pub enum TaxCategory {
    #[serde(rename = "standard_10")]
    Standard10,
    #[serde(rename = "reduced_8")]
    Reduced8,
    #[serde(rename = "exempt")]
    Exempt,
}

/// A single accounting line derived from an uploaded receipt.
///
/// Amounts are whole yen. Text fields are kept exactly as stored; trimming
/// happens during export validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: String,
    pub document_id: String,
    /// Date-only string as stored (ex. "2024-01-15"). `None` when the field
    /// was never filled in.
    pub date: Option<String>,
    pub vendor: String,
    pub account_title: String,
    pub amount_in: i64,
    pub amount_out: i64,
    pub tax_category: Option<TaxCategory>,
    pub description: Option<String>,
    pub status: DocumentStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub original_name: String,
    pub storage_path: String,
    pub status: DocumentStatus,
    pub source: DocumentSource,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub note: Option<String>,
    pub entries: Vec<Entry>,
}

/// Partial update applied to a document by the document usecase. Fields left
/// as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq, serde_derive::Deserialize)]
pub struct DocumentUpdate {
    pub note: Option<String>,
    pub status: Option<DocumentStatus>,
}

// --

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::InReview => "in_review",
            DocumentStatus::Confirmed => "confirmed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TaxCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxCategory::Standard10 => "standard_10",
            TaxCategory::Reduced8 => "reduced_8",
            TaxCategory::Exempt => "exempt",
        }
    }
}

impl FromStr for TaxCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard_10" => Ok(TaxCategory::Standard10),
            "reduced_8" => Ok(TaxCategory::Reduced8),
            "exempt" => Ok(TaxCategory::Exempt),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
