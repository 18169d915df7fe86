use std::sync::Arc;

use crate::{
    domain::usecases::{
        document_usecase::{DocumentUsecase as _, DocumentUsecaseImpl},
        export_usecase::{ExportUsecase as _, ExportUsecaseImpl},
    },
    entities::{
        CsvDraft, CsvDraftOptions, Document, DocumentUpdate, DownloadArtifact, ExportConfig,
        ExportIssue, SHIFT_JIS_CSV_CONTENT_TYPE,
    },
    errors::ExportError,
    presentation::{
        csv_encoder::CsvDraftPrinter, issue_report::IssueReportPrinter,
        shift_jis_encoder::encode_shift_jis,
    },
    repositories::{DocumentRepository, InMemoryDocumentRepository},
};

/// Export and review operations over a document store.
///
/// Holds no per-request state; one instance can serve concurrent requests as
/// long as the repository supports concurrent reads.
pub struct ReceiptLedgerExportUtil<R: DocumentRepository> {
    export_usecase: ExportUsecaseImpl<R>,
    document_usecase: DocumentUsecaseImpl<R>,
    csv_printer: CsvDraftPrinter,
    report_printer: IssueReportPrinter,
}

impl<R: DocumentRepository> ReceiptLedgerExportUtil<R> {
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, ExportConfig::default())
    }

    pub fn with_config(repository: R, config: ExportConfig) -> Self {
        let repository = Arc::new(repository);
        Self {
            export_usecase: ExportUsecaseImpl::new(Arc::clone(&repository), config),
            document_usecase: DocumentUsecaseImpl::new(repository),
            csv_printer: CsvDraftPrinter::new(),
            report_printer: IssueReportPrinter::new(),
        }
    }

    /// Preview path: builds the CSV from every export-eligible entry in
    /// `[from, to]` and returns it together with all issues found.
    pub async fn generate_csv_draft(
        &self,
        from: &str,
        to: &str,
        options: CsvDraftOptions,
    ) -> Result<CsvDraft, ExportError> {
        let validation = self.export_usecase.validate_range(from, to).await?;
        Ok(CsvDraft {
            csv: self
                .csv_printer
                .print(&validation.rows, options.include_header),
            issues: validation.issues,
        })
    }

    /// Download path: any issue, warnings included, blocks the export. The
    /// CSV has no header and is encoded as Shift_JIS.
    pub async fn download_csv(
        &self,
        from: &str,
        to: &str,
    ) -> Result<DownloadArtifact, ExportError> {
        let validation = self.export_usecase.validate_range(from, to).await?;
        if !validation.issues.is_empty() {
            tracing::info!(
                issues = validation.issues.len(),
                "csv download blocked by integrity issues"
            );
            return Err(ExportError::ExportBlockedByIssues {
                count: validation.issues.len(),
            });
        }

        let csv = self.csv_printer.print(&validation.rows, false);
        let bytes = encode_shift_jis(&csv)?;
        let filename = format!(
            "entries_{}_{}.csv",
            validation.range.from().format("%Y-%m-%d"),
            validation.range.to().format("%Y-%m-%d"),
        );
        tracing::info!(%filename, rows = validation.rows.len(), "csv download prepared");
        Ok(DownloadArtifact {
            filename,
            content_type: SHIFT_JIS_CSV_CONTENT_TYPE,
            bytes,
        })
    }

    pub fn render_issue_report(&self, issues: &[ExportIssue]) -> String {
        self.report_printer.print_report(issues)
    }

    pub async fn list_documents(&self) -> Result<Vec<Document>, ExportError> {
        self.document_usecase.list_documents().await
    }

    pub async fn get_document(&self, id: &str) -> Result<Document, ExportError> {
        self.document_usecase.get_document(id).await
    }

    pub async fn update_document(
        &self,
        id: &str,
        update: DocumentUpdate,
    ) -> Result<Document, ExportError> {
        self.document_usecase.update_document(id, update).await
    }
}

impl ReceiptLedgerExportUtil<InMemoryDocumentRepository> {
    pub fn from_documents_json(
        documents_json: &str,
        config: ExportConfig,
    ) -> Result<Self, ExportError> {
        Ok(Self::with_config(
            InMemoryDocumentRepository::from_json(documents_json)?,
            config,
        ))
    }

    pub async fn from_documents_file<P>(
        documents_json: P,
        config: ExportConfig,
    ) -> Result<Self, ExportError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        Ok(Self::with_config(
            InMemoryDocumentRepository::from_json_file(documents_json).await?,
            config,
        ))
    }
}
