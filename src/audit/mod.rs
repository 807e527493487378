//! Audit logging for the expense tracker
//!
//! Records every category and transaction added to the ledger in an
//! append-only audit log, one JSON object per line.
//!
//! - `AuditEntry`: timestamp, operation, entity type and id, and the entity
//!   as JSON.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(EntityType::Category, "Food", &category))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
