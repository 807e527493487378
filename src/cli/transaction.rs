//! Transaction CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_entry_table, format_transaction_added};
use crate::error::LedgerResult;
use crate::ledger::{LedgerStore, RawTransaction};
use crate::models::{Month, TransactionDate};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        description: String,

        /// Amount with at most two decimal places (e.g. "12.50")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,

        /// Category name (defaults to the first category created)
        #[arg(short, long)]
        category: Option<String>,

        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<TransactionDate>,
    },

    /// List the transactions of one month
    List {
        #[arg(short, long)]
        year: i32,

        /// Month number or name (e.g. "3", "Mar", "March")
        #[arg(short, long)]
        month: Month,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut LedgerStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let date = match date {
                Some(date) => date,
                None => TransactionDate::from_naive(Local::now().date_naive())?,
            };

            let txn = store.add_transaction(&RawTransaction {
                description,
                amount,
                category,
                date,
            })?;
            println!("{}", format_transaction_added(&txn, &settings.currency_symbol));
        }

        TransactionCommands::List { year, month } => {
            let entries = store.ledger().entries_in(year, month);
            println!("{} {}", month, year);
            print!("{}", format_entry_table(&entries, &settings.currency_symbol));
        }
    }

    Ok(())
}
