//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. User-input rejections live in
//! [`crate::validation::Rejection`] and are wrapped here.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::Rejection;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// User input was rejected; nothing was mutated
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The persisted ledger failed structural validation
    #[error("Corrupt ledger at {}: {reason}", path.display())]
    CorruptLedger { path: PathBuf, reason: String },

    /// Saving the ledger failed; the in-memory ledger is ahead of the file
    #[error("Failed to save ledger (change kept in memory only): {0}")]
    PersistenceWriteFailure(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the ledger artifact
    #[error("I/O error: {0}")]
    Io(String),

    /// Legacy import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Build a corrupt-ledger error for the given artifact
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CorruptLedger {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a user-input rejection (caller should re-prompt)
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The wrapped rejection, if any
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(r) => Some(r),
            _ => None,
        }
    }

    /// Check if the in-memory ledger has diverged from the saved artifact
    pub fn is_unsaved(&self) -> bool {
        matches!(self, Self::PersistenceWriteFailure(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
