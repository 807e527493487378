//! CLI command handler for legacy import
//!
//! Migrates the old two-file layout (a category list and a header-less
//! transaction CSV) into the ledger.

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerStore;
use crate::models::TransactionDate;
use crate::storage::read_legacy;

/// Import subcommands
#[derive(Subcommand, Debug)]
pub enum ImportCommands {
    /// Import a legacy category file and transaction file
    Legacy {
        /// Newline-delimited category names
        #[arg(long)]
        categories: PathBuf,

        /// CSV rows of name, amount, description, category
        #[arg(long)]
        transactions: PathBuf,

        /// Date to record for every imported row (YYYY-MM-DD)
        #[arg(long)]
        date: TransactionDate,
    },
}

/// Handle an import command
pub fn handle_import_command(store: &mut LedgerStore, cmd: ImportCommands) -> LedgerResult<()> {
    match cmd {
        ImportCommands::Legacy {
            categories,
            transactions,
            date,
        } => {
            for path in [&categories, &transactions] {
                if !path.exists() {
                    return Err(LedgerError::Import(format!(
                        "File not found: {}",
                        path.display()
                    )));
                }
            }

            let import = read_legacy(&categories, &transactions)?;
            let summary = store.import_legacy(&import, date)?;

            println!("Import complete");
            println!("{}", "=".repeat(40));
            println!("  Categories added:    {}", summary.categories_added);
            println!("  Categories skipped:  {}", summary.categories_skipped);
            println!("  Transactions added:  {}", summary.transactions_added);
        }
    }

    Ok(())
}
