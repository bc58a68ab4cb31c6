use super::{ImportEngine, ImportError};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;

use crate::models::StoredTransaction;
use crate::storage::{MemoryStore, StorageError, TransactionFilter, TransactionStore};

const VALID_CSV: &[u8] = b"TX-1,120.50,USD,15/03/2024 14:30:00,Approved\n\
    TX-2,75.00,EUR,16/03/2024 09:15:45,Failed\n\
    TX-3,9.99,GBP,17/03/2024 23:05:10,Finished";

const VALID_XML: &[u8] = br#"<Transactions>
    <Transaction id="TX-10">
        <TransactionDate>2024-03-15T14:30:00</TransactionDate>
        <Status>Approved</Status>
        <PaymentDetails><Amount>120.50</Amount><CurrencyCode>USD</CurrencyCode></PaymentDetails>
    </Transaction>
    <Transaction id="TX-11">
        <TransactionDate>2024-03-16T09:15:45</TransactionDate>
        <Status>Done</Status>
        <PaymentDetails><Amount>75.00</Amount><CurrencyCode>EUR</CurrencyCode></PaymentDetails>
    </Transaction>
</Transactions>"#;

/// Counts `insert_all` calls so tests can assert storage was never touched.
struct RecordingStore {
    insert_calls: AtomicUsize
}

impl RecordingStore {
    fn new() -> Self {
        Self { insert_calls: AtomicUsize::new(0) }
    }

    fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

impl TransactionStore for RecordingStore {
    fn insert_all(&self, _batch: Vec<StoredTransaction>) -> Result<(), StorageError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn find(&self, _filter: &TransactionFilter) -> Result<Vec<StoredTransaction>, StorageError> {
        Ok(Vec::new())
    }
}

struct FailingStore;

impl TransactionStore for FailingStore {
    fn insert_all(&self, _batch: Vec<StoredTransaction>) -> Result<(), StorageError> {
        Err(StorageError::Backend("disk full".to_string()))
    }

    fn find(&self, _filter: &TransactionFilter) -> Result<Vec<StoredTransaction>, StorageError> {
        Err(StorageError::Backend("disk full".to_string()))
    }
}

#[test]
fn test_import_persists_fully_valid_csv_batch() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let engine = ImportEngine::new(store.clone());

    engine.import(VALID_CSV, "csv")?;

    assert_eq!(store.len(), 3);

    let finished = store.find(&TransactionFilter::Status("Finished".to_string()))?;
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].id, "TX-3");

    Ok(())
}

#[test]
fn test_import_persists_fully_valid_xml_batch() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let engine = ImportEngine::new(store.clone());

    engine.import(VALID_XML, "xml")?;

    assert_eq!(store.len(), 2);

    let done = store.find(&TransactionFilter::Status("Done".to_string()))?;
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, "TX-11");

    Ok(())
}

#[test]
fn test_import_rejects_unknown_extension_without_touching_storage() {
    let store = Arc::new(RecordingStore::new());
    let engine = ImportEngine::new(store.clone());

    let result = engine.import(VALID_CSV, ".txt");

    assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    assert_eq!(store.insert_calls(), 0);
}

#[test]
fn test_import_with_one_invalid_record_persists_nothing() {
    // Record 2 carries an unknown currency; the other two are clean.
    let csv = b"TX-1,10.00,USD,15/03/2024 14:30:00,Approved\n\
        TX-2,20.00,XYZ,16/03/2024 09:00:00,Approved\n\
        TX-3,30.00,EUR,17/03/2024 10:00:00,Finished";

    let store = Arc::new(RecordingStore::new());
    let engine = ImportEngine::new(store.clone());

    let errors = match engine.import(csv, "csv") {
        Err(ImportError::ValidationFailed { errors }) => errors,
        other => panic!("expected a validation failure, got {other:?}")
    };

    assert_eq!(errors.len(), 3);
    assert!(errors[0].is_empty());
    assert_eq!(errors[1], vec!["CurrencyCode is invalid"]);
    assert!(errors[2].is_empty());

    assert_eq!(store.insert_calls(), 0);
}

#[test]
fn test_import_rejects_wrong_vocabulary_for_the_format() {
    // "Done" is only valid for XML batches.
    let csv = b"TX-1,10.00,USD,15/03/2024 14:30:00,Done";

    let store = Arc::new(MemoryStore::new());
    let engine = ImportEngine::new(store.clone());

    let errors = match engine.import(csv, "csv") {
        Err(ImportError::ValidationFailed { errors }) => errors,
        other => panic!("expected a validation failure, got {other:?}")
    };

    assert_eq!(errors[0], vec!["Status is invalid"]);
    assert!(store.is_empty());
}

#[test]
fn test_storage_failure_surfaces_as_persistence_failed() {
    let engine = ImportEngine::new(Arc::new(FailingStore));

    let result = engine.import(VALID_CSV, "csv");

    assert!(matches!(result, Err(ImportError::PersistenceFailed(_))));
}

#[test]
fn test_empty_input_imports_zero_records() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let engine = ImportEngine::new(store.clone());

    engine.import(b"", "csv")?;

    assert!(store.is_empty());

    Ok(())
}
