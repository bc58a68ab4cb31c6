mod errors;
mod record;
mod transaction;

pub use errors::MissingField;
pub use record::TransactionRecord;
pub use transaction::StoredTransaction;

/// The file format a batch was parsed from.
///
/// Carried from reader resolution through validation because the allowed
/// status vocabulary differs per format.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SourceFormat {
    Csv,
    Xml
}
