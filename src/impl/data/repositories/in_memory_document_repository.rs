use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    data::datasources::documents_json_datasource::{
        DocumentsJsonDatasource as _, DocumentsJsonDatasourceImpl,
    },
    domain::repositories::document_repository::DocumentRepository,
    entities::Document,
    errors::ExportError,
};

/// Document store kept in memory, optionally seeded from a JSON dump.
pub struct InMemoryDocumentRepository {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryDocumentRepository {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    pub fn from_json(s: &str) -> Result<Self, ExportError> {
        Ok(Self::new(DocumentsJsonDatasourceImpl::new().from_string(s)?))
    }

    pub async fn from_json_file<P>(path: P) -> Result<Self, ExportError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        Ok(Self::new(
            DocumentsJsonDatasourceImpl::new().from_file(path).await?,
        ))
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn list_documents(&self) -> Result<Vec<Document>, ExportError> {
        Ok(self.documents.read().await.clone())
    }

    async fn get_document(&self, id: &str) -> Result<Option<Document>, ExportError> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn modify_document<F>(
        &self,
        id: &str,
        apply: F,
    ) -> Result<Option<Document>, ExportError>
    where
        F: FnOnce(&mut Document) -> Result<(), ExportError> + Send,
    {
        let mut documents = self.documents.write().await;
        let Some(stored) = documents.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        let mut document = stored.clone();
        apply(&mut document)?;
        *stored = document.clone();
        Ok(Some(document))
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::{DocumentSource, DocumentStatus};

    fn repository() -> InMemoryDocumentRepository {
        InMemoryDocumentRepository::new(vec![Document {
            id: "doc_1".to_string(),
            original_name: "amazon_receipt.pdf".to_string(),
            storage_path: "receipts/2024/doc_1.pdf".to_string(),
            status: DocumentStatus::InReview,
            source: DocumentSource::Amazon,
            created_at: DateTime::default(),
            updated_at: DateTime::default(),
            note: None,
            entries: Vec::new(),
        }])
    }

    #[tokio::test]
    async fn test_modify_stores_change() {
        let repository = repository();
        let modified = repository
            .modify_document("doc_1", |d| {
                d.note = Some("確認済み".to_string());
                Ok(())
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(modified.note.as_deref(), Some("確認済み"));

        let stored = repository.get_document("doc_1").await.unwrap().unwrap();
        assert_eq!(stored, modified);
    }

    #[tokio::test]
    async fn test_failed_modify_leaves_document_untouched() {
        let repository = repository();
        let result = repository
            .modify_document("doc_1", |d| {
                d.note = Some("discarded".to_string());
                d.status = DocumentStatus::Draft;
                Err(ExportError::DocumentNotFound {
                    id: "doc_1".to_string(),
                })
            })
            .await;
        assert!(matches!(result, Err(ExportError::DocumentNotFound { .. })));

        let stored = repository.get_document("doc_1").await.unwrap().unwrap();
        assert_eq!(stored.note, None);
        assert_eq!(stored.status, DocumentStatus::InReview);
    }

    #[tokio::test]
    async fn test_modify_unknown_document() {
        let result = repository()
            .modify_document("missing", |_| Ok(()))
            .await
            .unwrap();
        assert_eq!(result, None);
    }
}
