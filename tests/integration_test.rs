use std::io::Write;
use std::path::Path;
use std::process::Command;

use anyhow::Result;
use tempfile::Builder;

const BINARY: &str = env!("CARGO_BIN_EXE_transaction-import-engine");

#[test]
fn test_cli_imports_valid_csv_sample() -> Result<()> {
    let sample_path = Path::new("samples").join("sample.csv");

    let output = Command::new(BINARY).arg(sample_path).output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().next(), Some("imported 3 transactions"));

    Ok(())
}

#[test]
fn test_cli_imports_valid_xml_sample() -> Result<()> {
    let sample_path = Path::new("samples").join("sample.xml");

    let output = Command::new(BINARY).arg(sample_path).output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().next(), Some("imported 2 transactions"));

    Ok(())
}

#[test]
fn test_cli_runs_query_after_import() -> Result<()> {
    let sample_path = Path::new("samples").join("sample.csv");

    let output = Command::new(BINARY)
        .arg(sample_path)
        .arg("currency=USD")
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines, vec!["imported 3 transactions", "TX-1001,A,120.50 USD"]);

    Ok(())
}

#[test]
fn test_cli_rejects_batch_with_invalid_record_and_names_it() -> Result<()> {
    let sample_path = Path::new("samples").join("invalid.csv");

    let output = Command::new(BINARY).arg(sample_path).output()?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("1 of 3 records failed validation"));
    assert!(stderr.contains("record 2:"));
    assert!(stderr.contains("Id is empty"));
    assert!(stderr.contains("CurrencyCode is invalid"));
    assert!(stderr.contains("Status is invalid"));
    assert!(!stderr.contains("record 1:"));
    assert!(!stderr.contains("record 3:"));

    Ok(())
}

#[test]
fn test_cli_fails_closed_on_unsupported_extension() -> Result<()> {
    let mut file = Builder::new().suffix(".txt").tempfile()?;
    writeln!(file, "TX-1,10.00,USD,15/03/2024 14:30:00,Approved")?;

    let output = Command::new(BINARY).arg(file.path()).output()?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("not supported"));

    Ok(())
}
