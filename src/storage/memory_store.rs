use std::sync::RwLock;

use crate::models::StoredTransaction;
use crate::storage::{StorageError, TransactionFilter, TransactionStore};

/// In-process store backing the CLI and tests.
///
/// Rows are held in insertion order behind an `RwLock`; that order doubles
/// as the stable natural order queries are expected to preserve.
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<StoredTransaction>>
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of transactions currently held.
    pub fn len(&self) -> usize {
        self.rows.read().map_or(0, |rows| rows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TransactionStore for MemoryStore {
    fn insert_all(&self, batch: Vec<StoredTransaction>) -> Result<(), StorageError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| StorageError::Backend("row lock poisoned".to_string()))?;

        rows.extend(batch);

        Ok(())
    }

    fn find(&self, filter: &TransactionFilter) -> Result<Vec<StoredTransaction>, StorageError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StorageError::Backend("row lock poisoned".to_string()))?;

        Ok(rows.iter().filter(|tx| matches(tx, filter)).cloned().collect())
    }
}

fn matches(tx: &StoredTransaction, filter: &TransactionFilter) -> bool {
    match filter {
        TransactionFilter::Currency(code) => tx.currency_code == *code,
        TransactionFilter::Status(status) => tx.status == *status,
        TransactionFilter::DateRange { from, to } => {
            tx.transaction_date >= *from && tx.transaction_date <= *to
        }
    }
}
