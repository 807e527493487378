//! Audit history command

use crate::error::LedgerResult;
use crate::ledger::LedgerStore;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(store: &LedgerStore, count: usize) -> LedgerResult<()> {
    let Some(logger) = store.audit_logger() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
