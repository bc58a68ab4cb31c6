use std::sync::Arc;

use tracing::{debug, info};

use crate::engine::ImportError;
use crate::models::StoredTransaction;
use crate::readers;
use crate::storage::TransactionStore;
use crate::validation;

/// Orchestrates one batch import end to end.
///
/// Sequence: resolve a reader from the file extension, parse the raw bytes
/// into canonical records, validate every record, then hand the whole batch
/// to the storage collaborator in a single call. The batch is atomic: a
/// single invalid record aborts the import before storage is touched.
pub struct ImportEngine {
    store: Arc<dyn TransactionStore>
}

impl ImportEngine {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Imports one file's worth of transactions.
    ///
    /// Parsing itself never fails; malformed fields surface through the
    /// validation diagnostics carried by [`ImportError::ValidationFailed`],
    /// one message set per input record in input order.
    pub fn import(&self, bytes: &[u8], extension: &str) -> Result<(), ImportError> {
        let reader = readers::resolve(extension)?;
        let format = reader.format();
        let records = reader.read(bytes);

        debug!("parsed {} records from {format:?} input", records.len());

        let errors = validation::validate_batch(&records, format);

        if errors.iter().any(|record| !record.is_empty()) {
            return Err(ImportError::ValidationFailed { errors });
        }

        let batch = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                StoredTransaction::try_from(record)
                    .map_err(|source| ImportError::IncompleteRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = batch.len();
        self.store.insert_all(batch)?;

        info!("imported {count} transactions");

        Ok(())
    }
}
