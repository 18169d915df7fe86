use async_trait::async_trait;

use crate::{entities::Document, errors::ExportError};

/// Read/write access to the document store.
///
/// `list_documents` must return every document with its entries populated;
/// export validation never loads anything lazily.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn list_documents(&self) -> Result<Vec<Document>, ExportError>;

    async fn get_document(&self, id: &str) -> Result<Option<Document>, ExportError>;

    /// Runs `apply` on the stored document with writers excluded for the
    /// whole read-modify-write. The change is stored only if `apply`
    /// succeeds. Returns `None` for an unknown id.
    async fn modify_document<F>(
        &self,
        id: &str,
        apply: F,
    ) -> Result<Option<Document>, ExportError>
    where
        F: FnOnce(&mut Document) -> Result<(), ExportError> + Send;
}
