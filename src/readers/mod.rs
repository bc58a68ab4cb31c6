mod csv_reader;
mod xml_reader;

use thiserror::Error;

use crate::models::{SourceFormat, TransactionRecord};

pub use csv_reader::CsvReader;
pub use xml_reader::XmlReader;

/// Converts one file format's raw bytes into canonical transaction records.
///
/// Reading is infallible by contract: a malformed value degrades to an
/// unset field and unreadable input degrades to empty or all-unset records,
/// keeping the validator the single source of rejection diagnostics.
pub trait FileReader {
    /// The format this reader handles, used downstream to pick the status
    /// vocabulary.
    fn format(&self) -> SourceFormat;

    /// Parses the full file contents into records, one per transaction.
    fn read(&self, bytes: &[u8]) -> Vec<TransactionRecord>;
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("file format `{0}` is not supported")]
pub struct UnsupportedFormat(pub String);

/// Maps a file-extension token to the reader for that format.
///
/// Matching is case-insensitive and tolerates a leading dot. Anything other
/// than `csv` or `xml` fails closed, carrying the offending token.
pub fn resolve(extension: &str) -> Result<Box<dyn FileReader>, UnsupportedFormat> {
    let normalized = extension.strip_prefix('.').unwrap_or(extension).to_ascii_lowercase();

    match normalized.as_str() {
        "csv" => Ok(Box::new(CsvReader)),
        "xml" => Ok(Box::new(XmlReader)),
        _ => Err(UnsupportedFormat(extension.to_string()))
    }
}
