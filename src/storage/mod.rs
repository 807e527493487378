//! Storage layer for the expense tracker
//!
//! The whole ledger lives in one JSON document that is rewritten atomically
//! on every save. A missing document is an empty ledger; a document that
//! fails structural validation is a fatal `CorruptLedger` error.

pub mod document;
pub mod file_io;
pub mod legacy;

pub use document::{LedgerDocument, TransactionRecord};
pub use file_io::{read_json, write_json_atomic};
pub use legacy::{read_legacy, LegacyImport, LegacyRow};

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;

/// Loads and saves the ledger document
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Create a repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether a document has been written yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the ledger, or an empty one if no document exists
    pub fn load(&self) -> LedgerResult<Ledger> {
        let Some(document) = read_json::<LedgerDocument, _>(&self.path)? else {
            return Ok(Ledger::new());
        };

        let ledger = document
            .into_ledger()
            .map_err(|reason| LedgerError::corrupt(&self.path, reason))?;

        debug!(
            path = %self.path.display(),
            categories = ledger.categories().len(),
            transactions = ledger.transaction_count(),
            "loaded ledger"
        );
        Ok(ledger)
    }

    /// Replace the document with the full contents of `ledger`
    pub fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        write_json_atomic(&self.path, &LedgerDocument::from(ledger))
    }
}
