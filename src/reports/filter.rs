//! Transaction filter
//!
//! Any subset of year, month and category. An empty filter matches every
//! transaction.

use crate::models::{Month, Transaction};

/// Predicate over transactions used by every aggregate query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub year: Option<i32>,
    pub month: Option<Month>,
    pub category: Option<String>,
}

impl TransactionFilter {
    /// A filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Shorthand for a year + month filter
    pub fn for_month(year: i32, month: Month) -> Self {
        Self::new().year(year).month(month)
    }

    /// Check a transaction against every field that is set
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.year.map_or(true, |y| transaction.year() == y)
            && self.month.map_or(true, |m| transaction.month() == m)
            && self
                .category
                .as_deref()
                .map_or(true, |c| transaction.category().as_str() == c)
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.category.is_none()
    }

    /// Short human description, e.g. `March 2024, Food`
    pub fn describe(&self) -> String {
        let period = match (self.month, self.year) {
            (Some(m), Some(y)) => Some(format!("{} {}", m, y)),
            (Some(m), None) => Some(m.to_string()),
            (None, Some(y)) => Some(y.to_string()),
            (None, None) => None,
        };

        match (period, self.category.as_deref()) {
            (Some(p), Some(c)) => format!("{}, {}", p, c),
            (Some(p), None) => p,
            (None, Some(c)) => c.to_string(),
            (None, None) => "All transactions".to_string(),
        }
    }
}
