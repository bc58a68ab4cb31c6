use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{SourceFormat, TransactionRecord};
use crate::readers::FileReader;

const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Reader for headerless CSV batches.
///
/// Fields map positionally to `id, amount, currency_code, transaction_date,
/// status`. Every cell is trimmed before interpretation, and a cell that
/// cannot be coerced to its target type leaves that field unset rather than
/// rejecting the line.
pub struct CsvReader;

impl FileReader for CsvReader {
    fn format(&self) -> SourceFormat {
        SourceFormat::Csv
    }

    fn read(&self, bytes: &[u8]) -> Vec<TransactionRecord> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(bytes);

        let mut records = Vec::new();

        for (line, row) in reader.records().enumerate() {
            match row {
                Ok(row) => records.push(record_from_row(&row)),
                Err(error) => {
                    warn!("CSV line {} could not be read: {error}", line + 1);
                    // Keep an all-unset record at this position so the
                    // validator's output stays aligned to input order.
                    records.push(TransactionRecord::default());
                }
            }
        }

        records
    }
}

fn record_from_row(row: &StringRecord) -> TransactionRecord {
    TransactionRecord {
        id: text_field(row.get(0)),
        amount: row.get(1).and_then(|cell| cell.parse::<Decimal>().ok()),
        currency_code: text_field(row.get(2)),
        transaction_date: row
            .get(3)
            .and_then(|cell| NaiveDateTime::parse_from_str(cell, DATE_FORMAT).ok()),
        status: text_field(row.get(4))
    }
}

fn text_field(cell: Option<&str>) -> Option<String> {
    cell.filter(|value| !value.is_empty()).map(str::to_string)
}
