use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    domain::{
        logic::export_validator::{ExportValidator, ValidationResult},
        repositories::document_repository::DocumentRepository,
    },
    entities::{DateRange, ExportConfig},
    errors::ExportError,
};

#[async_trait]
pub trait ExportUsecase: Send + Sync {
    /// Parses the range, loads all documents and validates them. Fails only
    /// on a bad range or a store error; data problems end up in the issues.
    async fn validate_range(&self, from: &str, to: &str) -> Result<ValidationResult, ExportError>;
}

pub(crate) struct ExportUsecaseImpl<R: DocumentRepository> {
    document_repository: Arc<R>,
    config: ExportConfig,
}

#[async_trait]
impl<R: DocumentRepository> ExportUsecase for ExportUsecaseImpl<R> {
    async fn validate_range(
        &self,
        from: &str,
        to: &str,
    ) -> Result<ValidationResult, ExportError> {
        let range = DateRange::parse(from, to)?;
        let documents = self.document_repository.list_documents().await?;
        Ok(ExportValidator::new(&self.config, range).validate(&documents))
    }
}

impl<R: DocumentRepository> ExportUsecaseImpl<R> {
    pub(crate) fn new(document_repository: Arc<R>, config: ExportConfig) -> Self {
        ExportUsecaseImpl {
            document_repository,
            config,
        }
    }
}
