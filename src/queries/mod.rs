
use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::StoredTransaction;
use crate::storage::{StorageError, TransactionFilter, TransactionStore};

/// Read-only output shape for query responses: the transaction id, a
/// one-letter status code and a `"<amount> <currency>"` payment string.
/// Built per response, never persisted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransactionView {
    pub id: String,
    pub status_code: String,
    pub payment: String
}

/// Query layer over the storage collaborator.
///
/// The store evaluates the filters; this layer only shapes them and
/// projects the matches, preserving the store's natural order.
pub struct TransactionQueries {
    store: Arc<dyn TransactionStore>
}

impl TransactionQueries {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Transactions whose currency code matches exactly.
    pub fn by_currency(&self, currency: &str) -> Result<Vec<TransactionView>, StorageError> {
        self.project(TransactionFilter::Currency(currency.to_string()))
    }

    /// Transactions whose stored status matches exactly. Matching runs
    /// against the full status text, not the one-letter display code.
    pub fn by_status(&self, status: &str) -> Result<Vec<TransactionView>, StorageError> {
        self.project(TransactionFilter::Status(status.to_string()))
    }

    /// Transactions timestamped within the inclusive date range.
    ///
    /// `from` is widened to its start of day (00:00:00.000) and `to` to its
    /// end of day (23:59:59.999) before filtering. Callers must pass
    /// `from <= to`.
    pub fn by_date_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<TransactionView>, StorageError> {
        self.project(TransactionFilter::DateRange {
            from: from.and_time(NaiveTime::MIN),
            to: end_of_day(to)
        })
    }

    fn project(&self, filter: TransactionFilter) -> Result<Vec<TransactionView>, StorageError> {
        Ok(self.store.find(&filter)?.iter().map(view_of).collect())
    }
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::milliseconds(1)
}

/// Maps a stored status to its one-letter display code. Statuses outside
/// both format vocabularies map to an empty code rather than an error.
pub fn display_status_code(status: &str) -> &'static str {
    match status {
        "Approved" => "A",
        "Failed" | "Rejected" => "R",
        "Finished" | "Done" => "D",
        _ => ""
    }
}

fn view_of(tx: &StoredTransaction) -> TransactionView {
    TransactionView {
        id: tx.id.clone(),
        status_code: display_status_code(&tx.status).to_string(),
        payment: format!("{} {}", tx.amount, tx.currency_code)
    }
}
