use thiserror::Error;

use crate::models::MissingField;
use crate::readers::UnsupportedFormat;
use crate::storage::StorageError;
use crate::validation::RecordErrors;

/// Everything that can go wrong during one batch import.
///
/// Unsupported formats and validation failures are non-retryable: the
/// caller has to fix the input. Persistence failures come from the storage
/// collaborator and may be retried at the caller's discretion; the engine
/// never retries internally.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormat),

    #[error("{} of {} records failed validation", invalid_count(.errors), .errors.len())]
    ValidationFailed {
        /// One message set per input record, aligned to input order.
        errors: Vec<RecordErrors>
    },

    /// Internal guard: validation passed but a record still had an unset
    /// field when promoted for persistence.
    #[error("record {index} could not be promoted after validation: {source}")]
    IncompleteRecord {
        index: usize,
        source: MissingField
    },

    #[error("storage rejected the batch: {0}")]
    PersistenceFailed(#[from] StorageError)
}

fn invalid_count(errors: &[RecordErrors]) -> usize {
    errors.iter().filter(|record| !record.is_empty()).count()
}
