//! Legacy two-file layout
//!
//! Early versions kept categories in a newline-delimited text file and
//! transactions in a header-less CSV with the columns
//! `name, amount, description, category`. Neither file carries a date.
//! This module only reads that layout; the ledger is always written as a
//! single JSON document.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

/// One row of the legacy transaction file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyRow {
    /// 1-based row number in the source file
    pub line: usize,
    pub name: String,
    pub amount: String,
    pub description: String,
    pub category: String,
}

impl LegacyRow {
    /// Description for the migrated transaction
    ///
    /// The legacy `name` leads; a non-empty legacy description follows it.
    pub fn merged_description(&self) -> String {
        let name = self.name.trim();
        let extra = self.description.trim();
        match (name.is_empty(), extra.is_empty()) {
            (_, true) => name.to_string(),
            (true, false) => extra.to_string(),
            (false, false) => format!("{} - {}", name, extra),
        }
    }
}

/// Contents of a legacy category file and transaction file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyImport {
    pub categories: Vec<String>,
    pub rows: Vec<LegacyRow>,
}

/// Read both legacy files
pub fn read_legacy(categories_path: &Path, transactions_path: &Path) -> LedgerResult<LegacyImport> {
    let categories = File::open(categories_path).map_err(|e| {
        LedgerError::Import(format!("Failed to open {}: {}", categories_path.display(), e))
    })?;
    let transactions = File::open(transactions_path).map_err(|e| {
        LedgerError::Import(format!("Failed to open {}: {}", transactions_path.display(), e))
    })?;

    Ok(LegacyImport {
        categories: parse_legacy_categories(BufReader::new(categories))?,
        rows: parse_legacy_transactions(transactions)?,
    })
}

/// Parse a newline-delimited category list, skipping blank lines
pub fn parse_legacy_categories<R: BufRead>(reader: R) -> LedgerResult<Vec<String>> {
    let mut categories = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            LedgerError::Import(format!("Failed to read category line {}: {}", i + 1, e))
        })?;
        if line.trim().is_empty() {
            continue;
        }
        categories.push(line);
    }
    Ok(categories)
}

/// Parse header-less `name, amount, description, category` rows
pub fn parse_legacy_transactions<R: Read>(reader: R) -> LedgerResult<Vec<LegacyRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let line = i + 1;
        let record = result
            .map_err(|e| LedgerError::Import(format!("Failed to read row {}: {}", line, e)))?;

        if record.len() != 4 {
            return Err(LedgerError::Import(format!(
                "Row {}: expected 4 columns (name, amount, description, category), found {}",
                line,
                record.len()
            )));
        }

        rows.push(LegacyRow {
            line,
            name: record[0].to_string(),
            amount: record[1].to_string(),
            description: record[2].to_string(),
            category: record[3].to_string(),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_categories() {
        let input = "Food\n\nRent\r\nBad Name\n";
        let categories = parse_legacy_categories(input.as_bytes()).unwrap();
        assert_eq!(categories, vec!["Food", "Rent", "Bad Name"]);
    }

    #[test]
    fn test_parse_transactions() {
        let input = "Lunch,12.50,,Food\nFlat,800,\"March, deposit\",Rent\n";
        let rows = parse_legacy_transactions(input.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Lunch");
        assert_eq!(rows[0].amount, "12.50");
        assert_eq!(rows[0].category, "Food");
        assert_eq!(rows[1].description, "March, deposit");
        assert_eq!(rows[1].line, 2);
    }

    #[test]
    fn test_wrong_column_count() {
        let input = "Lunch,12.50,Food\n";
        let err = parse_legacy_transactions(input.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Row 1"));
    }

    #[test]
    fn test_merged_description() {
        let row = |name: &str, description: &str| LegacyRow {
            line: 1,
            name: name.into(),
            amount: "1".into(),
            description: description.into(),
            category: "Food".into(),
        };

        assert_eq!(row("Lunch", "").merged_description(), "Lunch");
        assert_eq!(row("", "Tacos").merged_description(), "Tacos");
        assert_eq!(row("Lunch", "Tacos").merged_description(), "Lunch - Tacos");
        assert_eq!(row("", " ").merged_description(), "");
    }

    #[test]
    fn test_read_legacy_files() {
        let temp_dir = TempDir::new().unwrap();
        let cats = temp_dir.path().join("categories.txt");
        let txns = temp_dir.path().join("transactions.csv");
        std::fs::write(&cats, "Food\nRent\n").unwrap();
        std::fs::write(&txns, "Lunch,12.50,,Food\n").unwrap();

        let import = read_legacy(&cats, &txns).unwrap();
        assert_eq!(import.categories, vec!["Food", "Rent"]);
        assert_eq!(import.rows.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");
        let err = read_legacy(&missing, &missing).unwrap_err();
        assert!(matches!(err, LedgerError::Import(_)));
    }
}
