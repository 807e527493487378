//! CSV export functionality
//!
//! Amounts are written as plain decimals with two places and no currency
//! symbol.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::reports::Series;

const TRANSACTION_HEADER: [&str; 7] = [
    "Entry",
    "Year",
    "Month",
    "Day",
    "Category",
    "Description",
    "Amount",
];

const SERIES_HEADER: [&str; 2] = ["Label", "Amount"];

fn export_err(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Export(e.to_string())
}

/// Write every transaction in ledger order; returns the row count
pub fn write_transactions_csv<W: Write>(ledger: &Ledger, writer: W) -> LedgerResult<usize> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(TRANSACTION_HEADER).map_err(export_err)?;

    let mut count = 0;
    for (i, txn) in ledger.transactions().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            txn.year().to_string(),
            txn.month().number().to_string(),
            txn.day().to_string(),
            txn.category().to_string(),
            txn.description().to_string(),
            txn.amount().to_plain_string(),
        ])
        .map_err(export_err)?;
        count += 1;
    }

    wtr.flush().map_err(export_err)?;
    Ok(count)
}

/// Write a series as label/amount rows
pub fn write_series_csv<W: Write>(series: &Series, writer: W) -> LedgerResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(SERIES_HEADER).map_err(export_err)?;

    for bucket in &series.buckets {
        wtr.write_record([bucket.label.as_str(), bucket.amount.to_plain_string().as_str()])
            .map_err(export_err)?;
    }

    wtr.flush().map_err(export_err)?;
    Ok(())
}

/// Export all transactions to a CSV file
pub fn export_transactions_to_file(ledger: &Ledger, path: &Path) -> LedgerResult<usize> {
    let file = File::create(path)
        .map_err(|e| LedgerError::Export(format!("Cannot create {}: {}", path.display(), e)))?;
    let count = write_transactions_csv(ledger, file)?;
    debug!(path = %path.display(), rows = count, "exported transactions");
    Ok(count)
}

/// Export a series to a CSV file
pub fn export_series_to_file(series: &Series, path: &Path) -> LedgerResult<()> {
    let file = File::create(path)
        .map_err(|e| LedgerError::Export(format!("Cannot create {}: {}", path.display(), e)))?;
    write_series_csv(series, file)?;
    debug!(path = %path.display(), buckets = series.len(), "exported series");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, Transaction, TransactionDate};
    use crate::reports::Bucket;
    use tempfile::TempDir;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.register_category(Category::new("Food").unwrap()).unwrap();
        ledger
            .append(Transaction::new(
                Category::new("Food").unwrap(),
                "Lunch, with tip",
                Money::from_cents(1250),
                TransactionDate::new(2024, 3, 14).unwrap(),
            ))
            .unwrap();
        ledger
    }

    #[test]
    fn test_transactions_csv() {
        let mut buffer = Vec::new();
        let count = write_transactions_csv(&sample_ledger(), &mut buffer).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "Entry,Year,Month,Day,Category,Description,Amount\n\
             1,2024,3,14,Food,\"Lunch, with tip\",12.50\n"
        );
    }

    #[test]
    fn test_series_csv() {
        let series = Series {
            title: "t".into(),
            buckets: vec![Bucket {
                label: "Jan".into(),
                amount: Money::from_cents(100),
            }],
        };

        let mut buffer = Vec::new();
        write_series_csv(&series, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Label,Amount\nJan,1.00\n");
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        export_transactions_to_file(&sample_ledger(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Entry,Year"));
    }

    #[test]
    fn test_export_to_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.csv");

        let err = export_transactions_to_file(&sample_ledger(), &path).unwrap_err();
        assert!(matches!(err, LedgerError::Export(_)));
    }
}
