//! Core data models for the expense tracker
//!
//! This module contains the typed values the ledger is built from:
//! money amounts, categories, calendar dates and transactions.

pub mod category;
pub mod date;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use date::{Month, TransactionDate};
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
