use std::str::FromStr as _;

use chrono::{DateTime, Utc};

use crate::entities::{Document, DocumentSource, DocumentStatus, Entry, TaxCategory};

use super::amount_model::AmountModel;

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentModel {
    pub id: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub storage_path: String,
    pub status: DocumentStatus,
    #[serde(default)]
    pub source: DocumentSource,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub entries: Vec<EntryModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EntryModel {
    pub id: String,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub account_title: Option<String>,
    #[serde(default)]
    pub amount_in: AmountModel,
    #[serde(default)]
    pub amount_out: AmountModel,
    #[serde(default)]
    pub tax_category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<DocumentStatus>,
}

impl From<DocumentModel> for Document {
    fn from(model: DocumentModel) -> Document {
        let entries = model
            .entries
            .into_iter()
            .map(|entry| entry.into_entry(&model.id, model.status))
            .collect();
        Document {
            id: model.id,
            original_name: model.original_name,
            storage_path: model.storage_path,
            status: model.status,
            source: model.source,
            created_at: model.created_at,
            updated_at: model.updated_at,
            note: model.note,
            entries,
        }
    }
}

impl EntryModel {
    fn into_entry(self, document_id: &str, document_status: DocumentStatus) -> Entry {
        if let Some(owner) = self.document_id.as_deref().filter(|d| *d != document_id) {
            tracing::warn!(
                entry_id = %self.id,
                owner,
                document_id,
                "entry back-reference does not match its document; using the owning document"
            );
        }
        let tax_category = self.tax_category.as_deref().and_then(|raw| {
            TaxCategory::from_str(raw)
                .inspect_err(|_| {
                    tracing::warn!(entry_id = %self.id, tax_category = raw, "unknown tax category")
                })
                .ok()
        });
        Entry {
            document_id: document_id.to_string(),
            date: self.date,
            vendor: self.vendor.unwrap_or_default(),
            account_title: self.account_title.unwrap_or_default(),
            amount_in: self.amount_in.into(),
            amount_out: self.amount_out.into(),
            tax_category,
            description: self.description,
            status: self.status.unwrap_or(document_status),
            id: self.id,
        }
    }
}
