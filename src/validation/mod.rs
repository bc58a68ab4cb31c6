mod currency;

pub use currency::is_known_currency;

use crate::models::{SourceFormat, TransactionRecord};

/// All validation messages triggered for a single record, in rule order.
pub type RecordErrors = Vec<String>;

const MAX_ID_LENGTH: usize = 50;

const CSV_STATUSES: &[&str] = &["Approved", "Failed", "Finished"];
const XML_STATUSES: &[&str] = &["Approved", "Rejected", "Done"];

/// Checks every record against the field rules and the format's status
/// vocabulary, returning one message set per record in input order.
///
/// Every rule runs for every record; nothing short-circuits. Per field, a
/// missing value and an invalid-but-present value are mutually exclusive
/// and missing takes precedence. An empty set means the record is valid; a
/// batch is importable only if every set is empty.
pub fn validate_batch(records: &[TransactionRecord], format: SourceFormat) -> Vec<RecordErrors> {
    let allowed = allowed_statuses(format);

    records.iter().map(|record| validate_record(record, allowed)).collect()
}

/// The status values a format's source system may legitimately emit.
pub fn allowed_statuses(format: SourceFormat) -> &'static [&'static str] {
    match format {
        SourceFormat::Csv => CSV_STATUSES,
        SourceFormat::Xml => XML_STATUSES
    }
}

fn validate_record(record: &TransactionRecord, allowed: &[&str]) -> RecordErrors {
    let mut errors = RecordErrors::new();

    match &record.id {
        None => errors.push("Id is empty".to_string()),
        Some(id) if id.chars().count() > MAX_ID_LENGTH => {
            errors.push("Id is greater than 50 characters".to_string())
        }
        Some(_) => {}
    }

    if record.transaction_date.is_none() {
        errors.push("TransactionDate is empty".to_string());
    }

    if record.amount.is_none() {
        errors.push("Amount is empty".to_string());
    }

    match &record.currency_code {
        None => errors.push("CurrencyCode is empty".to_string()),
        Some(code) if !is_known_currency(code) => {
            errors.push("CurrencyCode is invalid".to_string())
        }
        Some(_) => {}
    }

    match &record.status {
        None => errors.push("Status is empty".to_string()),
        Some(status) if !allowed.contains(&status.as_str()) => {
            errors.push("Status is invalid".to_string())
        }
        Some(_) => {}
    }

    errors
}
