use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::errors::MissingField;
use crate::models::TransactionRecord;

/// A fully validated transaction as held by the storage collaborator.
///
/// Unlike `TransactionRecord`, every field is mandatory. Values are built
/// only from records that passed validation in full, written once as part
/// of an atomic batch, and never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredTransaction {
    pub id: String,
    pub amount: Decimal,
    pub currency_code: String,
    pub transaction_date: NaiveDateTime,
    pub status: String
}

impl TryFrom<TransactionRecord> for StoredTransaction {
    type Error = MissingField;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id.ok_or(MissingField("id"))?,
            amount: record.amount.ok_or(MissingField("amount"))?,
            currency_code: record.currency_code.ok_or(MissingField("currency_code"))?,
            transaction_date: record.transaction_date.ok_or(MissingField("transaction_date"))?,
            status: record.status.ok_or(MissingField("status"))?
        })
    }
}
