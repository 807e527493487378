//! The ledger aggregate
//!
//! `Ledger` owns the category registry, the year index and the append-only
//! list of transactions, and keeps them consistent with each other:
//!
//! - every transaction's category is registered
//! - a year is indexed if and only if some transaction falls in it
//!
//! `LedgerStore` wraps a `Ledger` with validation of raw input and
//! persistence after every mutation.

pub mod categories;
pub mod store;
pub mod years;

pub use categories::CategoryRegistry;
pub use store::{AmountPolicy, ImportSummary, LedgerStore, RawTransaction};
pub use years::YearIndex;

use std::collections::BTreeSet;

use crate::models::{Category, Month, Transaction};
use crate::validation::Rejection;

/// A transaction together with its 1-based position in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub number: usize,
    pub transaction: &'a Transaction,
}

/// Categories, years and transactions for one user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    categories: CategoryRegistry,
    years: YearIndex,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Reassemble a ledger from persisted parts, checking every invariant
    pub fn from_parts(
        categories: Vec<Category>,
        years: Vec<i32>,
        transactions: Vec<Transaction>,
    ) -> Result<Self, String> {
        let mut registry = CategoryRegistry::new();
        for category in categories {
            registry.add(category).map_err(|e| e.to_string())?;
        }

        let years = YearIndex::from_sorted(years)?;

        for (i, txn) in transactions.iter().enumerate() {
            if !registry.contains(txn.category().as_str()) {
                return Err(format!(
                    "transaction {} references unknown category {:?}",
                    i + 1,
                    txn.category().as_str()
                ));
            }
        }

        let used: BTreeSet<i32> = transactions.iter().map(Transaction::year).collect();
        let indexed: BTreeSet<i32> = years.iter().collect();
        if used != indexed {
            return Err(format!(
                "year list {:?} does not match transaction years {:?}",
                indexed, used
            ));
        }

        Ok(Self {
            categories: registry,
            years,
            transactions,
        })
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn years(&self) -> &YearIndex {
        &self.years
    }

    /// All transactions in the order they were added
    ///
    /// The returned iterator borrows the ledger; call again to restart.
    pub fn transactions(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.transactions.is_empty()
    }

    /// Transactions of one calendar month, numbered by ledger position
    pub fn entries_in(&self, year: i32, month: Month) -> Vec<Entry<'_>> {
        self.transactions
            .iter()
            .enumerate()
            .filter(|(_, t)| t.year() == year && t.month() == month)
            .map(|(i, transaction)| Entry {
                number: i + 1,
                transaction,
            })
            .collect()
    }

    pub(crate) fn register_category(&mut self, category: Category) -> Result<(), Rejection> {
        self.categories.add(category)
    }

    /// Append a transaction, indexing its year first
    ///
    /// Returns whether the transaction's year was new to the index.
    pub(crate) fn append(&mut self, transaction: Transaction) -> Result<bool, Rejection> {
        if !self.categories.contains(transaction.category().as_str()) {
            return Err(Rejection::UnknownCategory(
                transaction.category().as_str().to_string(),
            ));
        }
        let new_year = self.years.ensure(transaction.year());
        self.transactions.push(transaction);
        Ok(new_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionDate};

    fn cat(name: &str) -> Category {
        Category::new(name).unwrap()
    }

    fn txn(category: &str, cents: i64, year: i32, month: u32, day: u32) -> Transaction {
        Transaction::new(
            cat(category),
            "test",
            Money::from_cents(cents),
            TransactionDate::new(year, month, day).unwrap(),
        )
    }

    #[test]
    fn test_append_indexes_year() {
        let mut ledger = Ledger::new();
        ledger.register_category(cat("Food")).unwrap();

        assert!(ledger.append(txn("Food", 100, 2023, 1, 1)).unwrap());
        assert!(ledger.append(txn("Food", 100, 2021, 1, 1)).unwrap());
        assert!(!ledger.append(txn("Food", 100, 2023, 6, 1)).unwrap());

        assert_eq!(ledger.years().as_slice(), &[2021, 2023]);
        assert_eq!(ledger.transaction_count(), 3);
    }

    #[test]
    fn test_append_unknown_category() {
        let mut ledger = Ledger::new();
        let err = ledger.append(txn("Food", 100, 2023, 1, 1)).unwrap_err();
        assert_eq!(err, Rejection::UnknownCategory("Food".into()));
        assert!(ledger.years().is_empty());
    }

    #[test]
    fn test_transactions_restartable() {
        let mut ledger = Ledger::new();
        ledger.register_category(cat("Food")).unwrap();
        ledger.append(txn("Food", 100, 2023, 1, 1)).unwrap();
        ledger.append(txn("Food", 200, 2023, 1, 2)).unwrap();

        let first: Money = ledger.transactions().map(Transaction::amount).sum();
        let second: Money = ledger.transactions().map(Transaction::amount).sum();
        assert_eq!(first, second);
        assert_eq!(first, Money::from_cents(300));
    }

    #[test]
    fn test_entries_in_month() {
        let mut ledger = Ledger::new();
        ledger.register_category(cat("Food")).unwrap();
        ledger.append(txn("Food", 100, 2024, 3, 1)).unwrap();
        ledger.append(txn("Food", 200, 2024, 4, 1)).unwrap();
        ledger.append(txn("Food", 300, 2024, 3, 9)).unwrap();
        ledger.append(txn("Food", 400, 2023, 3, 9)).unwrap();

        let entries = ledger.entries_in(2024, Month::March);
        let numbers: Vec<_> = entries.iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_from_parts_valid() {
        let ledger = Ledger::from_parts(
            vec![cat("Food"), cat("Rent")],
            vec![2023, 2024],
            vec![txn("Food", 100, 2024, 1, 1), txn("Rent", 100, 2023, 1, 1)],
        )
        .unwrap();
        assert_eq!(ledger.categories().len(), 2);
        assert_eq!(ledger.years().as_slice(), &[2023, 2024]);
    }

    #[test]
    fn test_from_parts_rejects_inconsistency() {
        // Duplicate category
        assert!(Ledger::from_parts(vec![cat("Food"), cat("Food")], vec![], vec![]).is_err());

        // Unknown category
        assert!(Ledger::from_parts(vec![], vec![2024], vec![txn("Food", 1, 2024, 1, 1)]).is_err());

        // Year with no transactions
        assert!(Ledger::from_parts(vec![cat("Food")], vec![2024], vec![]).is_err());

        // Transaction year missing from index
        assert!(Ledger::from_parts(
            vec![cat("Food")],
            vec![2023],
            vec![txn("Food", 1, 2024, 1, 1)]
        )
        .is_err());

        // Unsorted years
        assert!(Ledger::from_parts(
            vec![cat("Food")],
            vec![2024, 2023],
            vec![txn("Food", 1, 2024, 1, 1), txn("Food", 1, 2023, 1, 1)]
        )
        .is_err());
    }
}
