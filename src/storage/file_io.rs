//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::LedgerError;

/// Read JSON from a file, returning `None` if the file doesn't exist
///
/// A file that exists but does not parse as `T` is reported as
/// [`LedgerError::CorruptLedger`].
pub fn read_json<T, P>(path: P) -> Result<Option<T>, LedgerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no file found, starting empty");
            return Ok(None);
        }
        Err(e) => {
            return Err(LedgerError::Io(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| LedgerError::corrupt(path, e.to_string()))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely replaced or left untouched. Any failure is
/// reported as [`LedgerError::PersistenceWriteFailure`].
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let fail = |what: &str, e: &dyn std::fmt::Display| {
        LedgerError::PersistenceWriteFailure(format!("{} {}: {}", what, path.display(), e))
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| fail("Failed to create directory for", &e))?;
    }

    // Temp file must live in the same directory for rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| fail("Failed to create temp file for", &e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| fail("Failed to serialize", &e))?;

    writer
        .flush()
        .map_err(|e| fail("Failed to flush", &e))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| fail("Failed to sync", &e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        fail("Failed to replace", &e)
    })?;

    debug!(path = %path.display(), "wrote file");
    Ok(())
}
