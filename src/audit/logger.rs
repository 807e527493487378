//! JSONL audit log
//!
//! One entry per line. Writes append to the end of the file and never
//! rewrite earlier lines.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

fn audit_io(action: &str, e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Io(format!("Audit log {}: {}", action, e))
}

/// Append-only store of [`AuditEntry`] records
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append `entries` with one write call
    ///
    /// Every entry is encoded before the file is touched, so an encoding
    /// failure leaves the log as it was.
    pub fn log_batch(&self, entries: &[AuditEntry]) -> LedgerResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut buf = String::new();
        for entry in entries {
            buf.push_str(&serde_json::to_string(entry).map_err(|e| audit_io("encode", e))?);
            buf.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| audit_io("open", e))?;
        file.write_all(buf.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| audit_io("write", e))
    }

    /// Every entry in the log, oldest first. A missing log reads as empty.
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        let text = match fs::read_to_string(&self.log_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(audit_io("read", e)),
        };

        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line)
                    .map_err(|e| audit_io(&format!("line {}", i + 1), e))
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger
            .log(&AuditEntry::create(EntityType::Category, "Food", &"Food"))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Category);
    }

    #[test]
    fn test_log_batch_appends() {
        let (logger, temp) = create_test_logger();
        logger
            .log(&AuditEntry::create(EntityType::Category, "Food", &"Food"))
            .unwrap();

        let entries: Vec<AuditEntry> = (1..=3)
            .map(|i| AuditEntry::import(EntityType::Transaction, format!("txn-{}", i), &i))
            .collect();
        logger.log_batch(&entries).unwrap();
        logger.log_batch(&[]).unwrap();

        let text = std::fs::read_to_string(temp.path().join("audit.log")).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(logger.read_all().unwrap()[0].entity_id, "Food");
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 0..10 {
            logger
                .log(&AuditEntry::create(EntityType::Transaction, format!("txn-{}", i), &i))
                .unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let ids: Vec<_> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["txn-7", "txn-8", "txn-9"]);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (logger, temp) = create_test_logger();

        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
        assert!(!temp.path().join("audit.log").exists());
    }

    #[test]
    fn test_garbage_line_reports_position() {
        let (logger, temp) = create_test_logger();
        logger
            .log(&AuditEntry::create(EntityType::Category, "Rent", &"Rent"))
            .unwrap();
        let mut file = OpenOptions::new()
            .append(true)
            .open(temp.path().join("audit.log"))
            .unwrap();
        writeln!(file, "\n{{oops").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }
}
