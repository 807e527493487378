//! CLI commands for data export

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::export::export_transactions_to_file;
use crate::ledger::LedgerStore;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export every transaction to CSV
    Transactions {
        /// Output file path
        file: PathBuf,
    },
}

/// Handle an export command
pub fn handle_export_command(store: &LedgerStore, cmd: ExportCommands) -> LedgerResult<()> {
    match cmd {
        ExportCommands::Transactions { file } => {
            let count = export_transactions_to_file(store.ledger(), &file)?;
            println!("Exported {} transactions to {}", count, file.display());
        }
    }

    Ok(())
}
