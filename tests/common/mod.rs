#![allow(dead_code)]

use chrono::{DateTime, Utc};
use receipt_ledger_export::{
    entities::{Document, DocumentSource, DocumentStatus, Entry, ExportConfig, TaxCategory},
    repositories::InMemoryDocumentRepository,
    util::ReceiptLedgerExportUtil,
};

pub fn timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-02-01T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn entry(id: &str, document_id: &str, date: &str) -> Entry {
    Entry {
        id: id.to_string(),
        document_id: document_id.to_string(),
        date: Some(date.to_string()),
        vendor: "Amazon.co.jp".to_string(),
        account_title: "消耗品費".to_string(),
        amount_in: 0,
        amount_out: 9800,
        tax_category: Some(TaxCategory::Standard10),
        description: None,
        status: DocumentStatus::Confirmed,
    }
}

pub fn document(id: &str, status: DocumentStatus, entries: Vec<Entry>) -> Document {
    Document {
        id: id.to_string(),
        original_name: format!("{id}.pdf"),
        storage_path: format!("receipts/2024/{id}.pdf"),
        status,
        source: DocumentSource::Amazon,
        created_at: timestamp(),
        updated_at: timestamp(),
        note: None,
        entries,
    }
}

pub fn util(documents: Vec<Document>) -> ReceiptLedgerExportUtil<InMemoryDocumentRepository> {
    ReceiptLedgerExportUtil::with_config(
        InMemoryDocumentRepository::new(documents),
        ExportConfig::default(),
    )
}
