use async_trait::async_trait;

use crate::{
    data::models::document_model::DocumentModel,
    entities::Document,
    errors::ExportError,
};

/// Reads a JSON array of documents (with nested entries) as exported from
/// the document store.
#[async_trait]
pub(crate) trait DocumentsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<Document>, ExportError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<Document>, ExportError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct DocumentsJsonDatasourceImpl;

impl DocumentsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentsJsonDatasource for DocumentsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Document>, ExportError> {
        let models: Vec<DocumentModel> = serde_json::from_str(s)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<Document>, ExportError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let content = tokio::fs::read_to_string(path).await?;
        self.from_string(&content)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::{DocumentSource, DocumentStatus, TaxCategory};

    const DUMP: &str = r#"[
        {
            "id": "doc_1",
            "originalName": "amazon_receipt.pdf",
            "storagePath": "receipts/2024/doc_1.pdf",
            "status": "in_review",
            "source": "amazon",
            "createdAt": "2024-01-20T10:00:00Z",
            "updatedAt": "2024-01-21T10:00:00Z",
            "note": "サンプルデータ",
            "entries": [
                {
                    "id": "entry_1",
                    "documentId": "doc_1",
                    "date": "2024-01-15",
                    "vendor": "Amazon.co.jp",
                    "accountTitle": "消耗品費",
                    "amountIn": 0,
                    "amountOut": 9800,
                    "taxCategory": "standard_10",
                    "description": "モニターライト",
                    "status": "in_review"
                },
                {
                    "id": "entry_2",
                    "amountOut": null,
                    "taxCategory": "standard_8"
                }
            ]
        },
        { "id": "doc_2", "status": "draft" }
    ]"#;

    #[test]
    fn test_from_string() {
        let documents = DocumentsJsonDatasourceImpl::new().from_string(DUMP).unwrap();
        assert_eq!(documents.len(), 2);

        let doc = &documents[0];
        assert_eq!(doc.status, DocumentStatus::InReview);
        assert_eq!(doc.source, DocumentSource::Amazon);
        assert_eq!(doc.note.as_deref(), Some("サンプルデータ"));
        assert_eq!(doc.entries[0].amount_out, 9800);
        assert_eq!(doc.entries[0].tax_category, Some(TaxCategory::Standard10));

        let sparse = &doc.entries[1];
        assert_eq!(sparse.document_id, "doc_1");
        assert_eq!(sparse.date, None);
        assert_eq!(sparse.vendor, "");
        assert_eq!(sparse.amount_in, 0);
        assert_eq!(sparse.amount_out, 0);
        assert_eq!(sparse.tax_category, None);
        assert_eq!(sparse.status, DocumentStatus::InReview);

        assert_eq!(documents[1].source, DocumentSource::Other);
        assert!(documents[1].entries.is_empty());
    }

    #[test]
    fn test_rejects_unknown_status() {
        let result = DocumentsJsonDatasourceImpl::new()
            .from_string(r#"[{ "id": "doc_1", "status": "archived" }]"#);
        assert!(matches!(result, Err(ExportError::InvalidDocumentsJson(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(DocumentsJsonDatasourceImpl::new().from_string("{").is_err());
    }
}
