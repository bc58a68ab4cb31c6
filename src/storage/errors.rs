use thiserror::Error;

/// Opaque failure reported by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String)
}
