mod engine;
mod models;
mod queries;
mod readers;
mod storage;
mod validation;

use std::path::Path;
use std::process::exit;
use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::{ImportEngine, ImportError};
use crate::queries::{TransactionQueries, TransactionView};
use crate::storage::MemoryStore;
use crate::validation::RecordErrors;

fn main() -> Result<()> {
    //NOTE: Hand-rolled argument handling is enough for three positional args;
    //      clap would be the tool of choice if the surface grows beyond this.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: transaction-import-engine [input].(csv|xml) [query:optional] [log_level:optional]");
        eprintln!("Queries: currency=USD | status=Approved | dates=2024-01-01..2024-01-31");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];

    let (query, log_level) = match args.get(2) {
        Some(arg) if arg.contains('=') => (
            Some(arg.as_str()),
            args.get(3).map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR)
        ),
        Some(arg) => (None, parse_log_level(arg)),
        None => (None, LevelFilter::ERROR)
    };

    setup_logging(log_level);

    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    let bytes = std::fs::read(path)?;

    let store = Arc::new(MemoryStore::new());
    let engine = ImportEngine::new(store.clone());

    match engine.import(&bytes, extension) {
        Ok(()) => {
            info!("import of {path} completed");
            println!("imported {} transactions", store.len());
        }
        Err(ImportError::ValidationFailed { errors }) => {
            report_validation_errors(&errors);
            exit(1);
        }
        Err(error) => {
            eprintln!("{error}");
            exit(1);
        }
    }

    if let Some(selector) = query {
        let queries = TransactionQueries::new(store);

        for view in run_query(&queries, selector)? {
            println!("{},{},{}", view.id, view.status_code, view.payment);
        }
    }

    Ok(())
}

fn run_query(queries: &TransactionQueries, selector: &str) -> Result<Vec<TransactionView>> {
    let (key, value) = selector.split_once('=').unwrap_or((selector, ""));

    match key {
        "currency" => Ok(queries.by_currency(value)?),
        "status" => Ok(queries.by_status(value)?),
        "dates" => {
            let (from, to) = value
                .split_once("..")
                .ok_or_else(|| anyhow!("dates query expects `from..to`"))?;

            let from: NaiveDate = from.parse()?;
            let to: NaiveDate = to.parse()?;

            if from > to {
                bail!("dates query expects from <= to");
            }

            Ok(queries.by_date_range(from, to)?)
        }
        other => bail!("unknown query `{other}`; expected currency=, status= or dates=")
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Program output goes to stdout, so logging has to stay on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn report_validation_errors(errors: &[RecordErrors]) {
    let invalid = errors.iter().filter(|record| !record.is_empty()).count();

    eprintln!("import rejected: {invalid} of {} records failed validation", errors.len());

    for (index, record) in errors.iter().enumerate() {
        if !record.is_empty() {
            eprintln!("record {}: {}", index + 1, record.join("; "));
        }
    }
}
