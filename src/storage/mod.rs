mod errors;
mod memory_store;

use chrono::NaiveDateTime;

use crate::models::StoredTransaction;

pub use errors::StorageError;
pub use memory_store::MemoryStore;

/// The read predicates the store knows how to evaluate.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionFilter {
    /// Exact match on the ISO currency code.
    Currency(String),
    /// Exact match on the stored status text.
    Status(String),
    /// Inclusive timestamp range.
    DateRange {
        from: NaiveDateTime,
        to: NaiveDateTime
    }
}

/// Persistence collaborator for validated transactions.
///
/// Implementations own their isolation guarantees: `insert_all` commits the
/// whole batch or none of it, and `find` returns matches in a natural order
/// that is stable for a given query.
pub trait TransactionStore: Send + Sync {
    fn insert_all(&self, batch: Vec<StoredTransaction>) -> Result<(), StorageError>;

    fn find(&self, filter: &TransactionFilter) -> Result<Vec<StoredTransaction>, StorageError>;
}
