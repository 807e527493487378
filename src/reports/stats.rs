//! Totals and averages over the ledger
//!
//! Every total is the sum of the amounts that pass a filter, and every
//! average is that total divided by the count of the same subset. An empty
//! subset has no average: [`Average::NotAvailable`], never zero.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::ledger::Ledger;
use crate::models::{Money, Month, Transaction};

use super::filter::TransactionFilter;

/// Result of an average query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Average {
    /// Exact average of at least one amount
    Amount(Decimal),
    /// No transaction matched
    NotAvailable,
}

impl Average {
    /// Average of `total` over `count` transactions
    pub fn of(total: Money, count: usize) -> Self {
        if count == 0 {
            return Average::NotAvailable;
        }
        Average::Amount(total.to_decimal() / Decimal::from(count as u64))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Average::Amount(_))
    }

    /// The average rounded half away from zero to two decimal places
    pub fn rounded(&self) -> Option<Decimal> {
        match self {
            Average::Amount(value) => {
                let mut rounded =
                    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                rounded.rescale(2);
                Some(rounded)
            }
            Average::NotAvailable => None,
        }
    }

    /// Format as currency, or `N/A`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        match self.rounded() {
            Some(value) if value.is_sign_negative() && !value.is_zero() => {
                format!("-{}{}", symbol, value.abs())
            }
            Some(value) => format!("{}{}", symbol, value.abs()),
            None => "N/A".to_string(),
        }
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Count, total and average of one filtered subset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub filter: TransactionFilter,
    pub count: usize,
    pub total: Money,
    pub average: Average,
}

impl Summary {
    /// Reduce the transactions that pass `filter`
    pub fn collect<'a, I>(transactions: I, filter: TransactionFilter) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let (count, total) = transactions
            .into_iter()
            .filter(|t| filter.matches(t))
            .fold((0usize, Money::zero()), |(n, sum), t| (n + 1, sum + t.amount()));

        Self {
            filter,
            count,
            total,
            average: Average::of(total, count),
        }
    }
}

/// Aggregate queries over a ledger
#[derive(Debug, Clone, Copy)]
pub struct LedgerStats<'a> {
    ledger: &'a Ledger,
}

impl<'a> LedgerStats<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    pub fn summary(&self, filter: &TransactionFilter) -> Summary {
        Summary::collect(self.ledger.transactions(), filter.clone())
    }

    pub fn total(&self, filter: &TransactionFilter) -> Money {
        self.ledger
            .transactions()
            .filter(|t| filter.matches(t))
            .map(Transaction::amount)
            .sum()
    }

    pub fn average(&self, filter: &TransactionFilter) -> Average {
        self.summary(filter).average
    }

    pub fn monthly_total(&self, year: i32, month: Month) -> Money {
        self.total(&TransactionFilter::for_month(year, month))
    }

    pub fn monthly_average(&self, year: i32, month: Month) -> Average {
        self.average(&TransactionFilter::for_month(year, month))
    }

    pub fn monthly_category_total(&self, year: i32, month: Month, category: &str) -> Money {
        self.total(&TransactionFilter::for_month(year, month).category(category))
    }

    pub fn monthly_category_average(&self, year: i32, month: Month, category: &str) -> Average {
        self.average(&TransactionFilter::for_month(year, month).category(category))
    }

    pub fn yearly_total(&self, year: i32) -> Money {
        self.total(&TransactionFilter::new().year(year))
    }

    pub fn yearly_average(&self, year: i32) -> Average {
        self.average(&TransactionFilter::new().year(year))
    }

    pub fn yearly_category_total(&self, year: i32, category: &str) -> Money {
        self.total(&TransactionFilter::new().year(year).category(category))
    }

    pub fn yearly_category_average(&self, year: i32, category: &str) -> Average {
        self.average(&TransactionFilter::new().year(year).category(category))
    }

    pub(crate) fn ledger(&self) -> &'a Ledger {
        self.ledger
    }
}
