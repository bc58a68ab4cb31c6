use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// A single transaction as parsed from an input file, before validation.
///
/// Every field is optional: readers never reject a record over a missing or
/// malformed value. A field that could not be read or coerced is left unset
/// and the validator reports it, so parsing and rejection stay separate
/// concerns. Records are never mutated after parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionRecord {
    /// External transaction identifier, meaningful up to 50 characters.
    pub id: Option<String>,
    /// The transaction amount, when present and numeric.
    pub amount: Option<Decimal>,
    /// Expected to be a 3-letter ISO 4217 alphabetic code.
    pub currency_code: Option<String>,
    /// When the transaction took place, in the format's own date notation.
    pub transaction_date: Option<NaiveDateTime>,
    /// Free-form status text; the allowed vocabulary depends on the format.
    pub status: Option<String>
}
