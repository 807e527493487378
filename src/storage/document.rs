//! The persisted ledger document
//!
//! One JSON object with three top-level fields. Every scalar is stored as a
//! string, matching data files written by earlier versions:
//!
//! ```json
//! {
//!   "categories": ["Food", "Rent"],
//!   "years": ["2023", "2024"],
//!   "transactions": [
//!     { "category": "Food", "description": "Lunch", "amount": "12.50",
//!       "year": "2024", "month": "3", "day": "14" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;
use crate::models::{Category, Money, Transaction, TransactionDate};

/// Serializable ledger data structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerDocument {
    pub categories: Vec<String>,
    pub years: Vec<String>,
    pub transactions: Vec<TransactionRecord>,
}

/// One transaction as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub category: String,
    pub description: String,
    pub amount: String,
    pub year: String,
    pub month: String,
    pub day: String,
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            category: txn.category().to_string(),
            description: txn.description().to_string(),
            amount: txn.amount().to_plain_string(),
            year: txn.year().to_string(),
            month: txn.month().number().to_string(),
            day: txn.day().to_string(),
        }
    }
}

impl TransactionRecord {
    /// Convert to a typed transaction; `number` is 1-based, for messages
    fn into_transaction(self, number: usize) -> Result<Transaction, String> {
        let bad = |field: &str, value: &str| {
            format!("transaction {}: invalid {} {:?}", number, field, value)
        };

        let category = Category::new(self.category.as_str())
            .ok_or_else(|| bad("category", &self.category))?;

        if self.description.trim().is_empty() {
            return Err(format!("transaction {}: empty description", number));
        }

        let amount = Money::parse(&self.amount).map_err(|_| bad("amount", &self.amount))?;
        let year: i32 = self.year.parse().map_err(|_| bad("year", &self.year))?;
        let month: u32 = self.month.parse().map_err(|_| bad("month", &self.month))?;
        let day: u32 = self.day.parse().map_err(|_| bad("day", &self.day))?;
        let date = TransactionDate::new(year, month, day)
            .map_err(|e| format!("transaction {}: {}", number, e))?;

        Ok(Transaction::new(category, self.description, amount, date))
    }
}

impl From<&Ledger> for LedgerDocument {
    fn from(ledger: &Ledger) -> Self {
        Self {
            categories: ledger
                .categories()
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            years: ledger.years().iter().map(|y| y.to_string()).collect(),
            transactions: ledger.transactions().map(TransactionRecord::from).collect(),
        }
    }
}

impl LedgerDocument {
    /// Validate the document and build a ledger from it
    ///
    /// Returns a human-readable reason on the first structural problem.
    pub fn into_ledger(self) -> Result<Ledger, String> {
        let categories = self
            .categories
            .into_iter()
            .map(|name| {
                Category::new(name.as_str()).ok_or_else(|| format!("invalid category {:?}", name))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let years = self
            .years
            .iter()
            .map(|y| y.parse::<i32>().map_err(|_| format!("invalid year {:?}", y)))
            .collect::<Result<Vec<_>, _>>()?;

        let transactions = self
            .transactions
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.into_transaction(i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ledger::from_parts(categories, years, transactions)
    }
}
