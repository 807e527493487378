//! Transaction display formatting
//!
//! Month listings are rendered with `tabled`.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::ledger::Entry;
use crate::models::Transaction;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format one month of entries as a table
pub fn format_entry_table(entries: &[Entry<'_>], symbol: &str) -> String {
    if entries.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = entries.iter().map(|entry| {
        let txn = entry.transaction;
        EntryRow {
            number: entry.number,
            date: txn.date().to_string(),
            category: txn.category().to_string(),
            description: txn.description().to_string(),
            amount: txn.amount().format_with_symbol(symbol),
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// One-line confirmation after adding a transaction
pub fn format_transaction_added(txn: &Transaction, symbol: &str) -> String {
    format!(
        "Added {} to {} on {}: {}",
        txn.amount().format_with_symbol(symbol),
        txn.category(),
        txn.date(),
        txn.description()
    )
}
