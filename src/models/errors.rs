use thiserror::Error;

/// Raised when a record with an unset field is promoted to a stored
/// transaction.
///
/// Validation rejects such records before promotion ever runs, so this is
/// an internal guard rather than a caller-facing failure mode.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("field `{0}` is unset")]
pub struct MissingField(pub &'static str);
