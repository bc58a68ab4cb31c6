use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use crate::models::{SourceFormat, TransactionRecord};
use crate::readers::FileReader;

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Raw deserialization targets. Everything is optional text so a missing or
// malformed element never fails the document; coercion happens afterwards.

#[derive(Debug, Deserialize)]
struct XmlBatch {
    #[serde(rename = "Transaction", default)]
    transactions: Vec<XmlTransaction>
}

#[derive(Debug, Deserialize)]
struct XmlTransaction {
    #[serde(rename = "@id")]
    id: Option<String>,
    #[serde(rename = "PaymentDetails")]
    payment_details: Option<XmlPaymentDetails>,
    #[serde(rename = "TransactionDate")]
    transaction_date: Option<String>,
    #[serde(rename = "Status")]
    status: Option<String>
}

#[derive(Debug, Deserialize)]
struct XmlPaymentDetails {
    #[serde(rename = "Amount")]
    amount: Option<String>,
    #[serde(rename = "CurrencyCode")]
    currency_code: Option<String>
}

/// Reader for XML batches: a document of repeated `Transaction` elements,
/// each carrying an `id` attribute plus nested `PaymentDetails/Amount`,
/// `PaymentDetails/CurrencyCode`, `Status` and `TransactionDate` elements.
pub struct XmlReader;

impl FileReader for XmlReader {
    fn format(&self) -> SourceFormat {
        SourceFormat::Xml
    }

    fn read(&self, bytes: &[u8]) -> Vec<TransactionRecord> {
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(error) => {
                warn!("XML document is not valid UTF-8: {error}");
                return Vec::new();
            }
        };

        let batch: XmlBatch = match quick_xml::de::from_str(text) {
            Ok(batch) => batch,
            Err(error) => {
                warn!("XML document could not be parsed: {error}");
                return Vec::new();
            }
        };

        batch.transactions.into_iter().map(record_from_element).collect()
    }
}

fn record_from_element(element: XmlTransaction) -> TransactionRecord {
    let (amount, currency_code) = match element.payment_details {
        Some(details) => (
            details
                .amount
                .as_deref()
                .and_then(|text| text.trim().parse::<Decimal>().ok()),
            text_field(details.currency_code)
        ),
        None => (None, None)
    };

    TransactionRecord {
        id: text_field(element.id),
        amount,
        currency_code,
        transaction_date: element
            .transaction_date
            .and_then(|text| NaiveDateTime::parse_from_str(text.trim(), DATE_FORMAT).ok()),
        status: text_field(element.status)
    }
}

fn text_field(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
