use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    domain::{
        logic::status_transitions::can_transition,
        repositories::document_repository::DocumentRepository,
    },
    entities::{Document, DocumentUpdate},
    errors::ExportError,
};

#[async_trait]
pub trait DocumentUsecase: Send + Sync {
    async fn list_documents(&self) -> Result<Vec<Document>, ExportError>;

    async fn get_document(&self, id: &str) -> Result<Document, ExportError>;

    /// Applies a note and/or status change. Status changes must follow the
    /// workflow graph; re-setting the current status is accepted as a no-op.
    async fn update_document(
        &self,
        id: &str,
        update: DocumentUpdate,
    ) -> Result<Document, ExportError>;
}

pub(crate) struct DocumentUsecaseImpl<R: DocumentRepository> {
    document_repository: Arc<R>,
}

#[async_trait]
impl<R: DocumentRepository> DocumentUsecase for DocumentUsecaseImpl<R> {
    async fn list_documents(&self) -> Result<Vec<Document>, ExportError> {
        self.document_repository.list_documents().await
    }

    async fn get_document(&self, id: &str) -> Result<Document, ExportError> {
        self.document_repository
            .get_document(id)
            .await?
            .ok_or_else(|| ExportError::DocumentNotFound { id: id.to_string() })
    }

    async fn update_document(
        &self,
        id: &str,
        update: DocumentUpdate,
    ) -> Result<Document, ExportError> {
        self.document_repository
            .modify_document(id, move |document| apply_update(document, update))
            .await?
            .ok_or_else(|| ExportError::DocumentNotFound { id: id.to_string() })
    }
}

/// Runs under the store's write exclusion, so the transition check always
/// sees the status it replaces.
fn apply_update(document: &mut Document, update: DocumentUpdate) -> Result<(), ExportError> {
    if let Some(status) = update.status {
        if status != document.status {
            if !can_transition(document.status, status) {
                return Err(ExportError::InvalidStatusTransition {
                    id: document.id.clone(),
                    from: document.status,
                    to: status,
                });
            }
            tracing::info!(
                document_id = %document.id,
                from = %document.status,
                to = %status,
                "document status changed"
            );
            document.status = status;
        }
    }
    if let Some(note) = update.note {
        document.note = Some(note);
    }
    document.updated_at = Utc::now();
    Ok(())
}

impl<R: DocumentRepository> DocumentUsecaseImpl<R> {
    pub(crate) fn new(document_repository: Arc<R>) -> Self {
        DocumentUsecaseImpl {
            document_repository,
        }
    }
}
