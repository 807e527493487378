//! Transaction model
//!
//! A transaction records one expense. Transactions are immutable once
//! appended to the ledger; there is no edit or delete.

use serde::Serialize;
use std::fmt;

use super::category::Category;
use super::date::{Month, TransactionDate};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    category: Category,
    description: String,
    amount: Money,
    date: TransactionDate,
}

impl Transaction {
    /// Build a transaction from validated parts
    ///
    /// The ledger is responsible for checking that `category` is registered.
    pub(crate) fn new(
        category: Category,
        description: impl Into<String>,
        amount: Money,
        date: TransactionDate,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            amount,
            date,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> TransactionDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> Month {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date, self.amount, self.category, self.description
        )
    }
}
