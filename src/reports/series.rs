//! Chart series
//!
//! Bucketed totals ready for plotting. Every bucket is present even when no
//! transaction falls in it.

use crate::ledger::Ledger;
use crate::models::{Money, Month};

use super::stats::LedgerStats;

/// One labeled bucket of a series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub amount: Money,
}

/// A titled sequence of buckets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub title: String,
    pub buckets: Vec<Bucket>,
}

impl Series {
    /// Twelve buckets, one per calendar month of `year`
    pub fn monthly(ledger: &Ledger, year: i32) -> Self {
        let mut totals = [Money::zero(); 12];
        for txn in ledger.transactions().filter(|t| t.year() == year) {
            totals[txn.month().index()] += txn.amount();
        }

        let buckets = Month::ALL
            .iter()
            .zip(totals)
            .map(|(month, amount)| Bucket {
                label: month.abbr().to_string(),
                amount,
            })
            .collect();

        Self {
            title: format!("Spending by month, {}", year),
            buckets,
        }
    }

    /// One bucket per category in creation order, summed over all years
    pub fn by_category(ledger: &Ledger) -> Self {
        let categories = ledger.categories();
        let mut totals = vec![Money::zero(); categories.len()];
        for txn in ledger.transactions() {
            if let Some(i) = categories.position(txn.category().as_str()) {
                totals[i] += txn.amount();
            }
        }

        let buckets = categories
            .iter()
            .zip(totals)
            .map(|(category, amount)| Bucket {
                label: category.to_string(),
                amount,
            })
            .collect();

        Self {
            title: "Spending by category".to_string(),
            buckets,
        }
    }

    pub fn values(&self) -> Vec<Money> {
        self.buckets.iter().map(|b| b.amount).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn total(&self) -> Money {
        self.buckets.iter().map(|b| b.amount).sum()
    }

    /// Largest bucket amount, or zero for an empty series
    pub fn max(&self) -> Money {
        self.buckets
            .iter()
            .map(|b| b.amount)
            .max()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl LedgerStats<'_> {
    /// Monthly totals of one year, zero-filled
    pub fn monthly_series(&self, year: i32) -> Series {
        Series::monthly(self.ledger(), year)
    }

    /// Lifetime totals per category, zero-filled
    pub fn category_series(&self) -> Series {
        Series::by_category(self.ledger())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Transaction, TransactionDate};

    fn ledger_with(categories: &[&str], rows: &[(&str, i64, i32, u32)]) -> Ledger {
        let mut ledger = Ledger::new();
        for name in categories {
            ledger.register_category(Category::new(*name).unwrap()).unwrap();
        }
        for (category, cents, year, month) in rows {
            ledger
                .append(Transaction::new(
                    Category::new(*category).unwrap(),
                    "test",
                    Money::from_cents(*cents),
                    TransactionDate::new(*year, *month, 1).unwrap(),
                ))
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_category_series_zero_filled() {
        let ledger = ledger_with(
            &["Food", "Rent"],
            &[("Food", 1000, 2023, 3), ("Food", 2000, 2024, 5)],
        );
        let series = LedgerStats::new(&ledger).category_series();

        assert_eq!(series.labels(), vec!["Food", "Rent"]);
        assert_eq!(
            series.values(),
            vec![Money::from_cents(3000), Money::zero()]
        );
    }

    #[test]
    fn test_monthly_series_only_counts_year() {
        let ledger = ledger_with(
            &["Food"],
            &[
                ("Food", 1000, 2024, 1),
                ("Food", 500, 2024, 1),
                ("Food", 700, 2024, 12),
                ("Food", 9900, 2023, 1),
            ],
        );
        let series = LedgerStats::new(&ledger).monthly_series(2024);

        assert_eq!(series.len(), 12);
        assert_eq!(series.labels()[0], "Jan");
        assert_eq!(series.labels()[11], "Dec");
        assert_eq!(series.buckets[0].amount, Money::from_cents(1500));
        assert_eq!(series.buckets[11].amount, Money::from_cents(700));
        assert!(series.buckets[1..11].iter().all(|b| b.amount.is_zero()));
        assert_eq!(series.total(), Money::from_cents(2200));
        assert_eq!(series.max(), Money::from_cents(1500));
    }

    #[test]
    fn test_empty_ledger_series() {
        let ledger = Ledger::new();
        let stats = LedgerStats::new(&ledger);

        assert!(stats.category_series().is_empty());
        assert_eq!(stats.category_series().max(), Money::zero());
        assert_eq!(stats.monthly_series(2024).total(), Money::zero());
    }

    #[test]
    fn test_series_at_largest_amount() {
        use crate::models::money::{MAX_AMOUNT, MAX_AMOUNT_CENTS};
        let max = MAX_AMOUNT_CENTS as i64;
        let ledger = ledger_with(
            &["Food", "Rent"],
            &[("Food", max, 2024, 3), ("Food", max, 2024, 3), ("Rent", max, 2024, 4)],
        );
        let stats = LedgerStats::new(&ledger);

        let monthly = stats.monthly_series(2024);
        assert_eq!(monthly.buckets[2].amount, MAX_AMOUNT + MAX_AMOUNT);
        assert_eq!(monthly.buckets[3].amount, MAX_AMOUNT);
        assert_eq!(monthly.total().cents(), 3 * MAX_AMOUNT_CENTS);
        assert_eq!(monthly.max(), MAX_AMOUNT + MAX_AMOUNT);

        let by_category = stats.category_series();
        assert_eq!(by_category.values(), vec![MAX_AMOUNT + MAX_AMOUNT, MAX_AMOUNT]);
        assert_eq!(by_category.total().to_plain_string(), "2999999999999.97");
    }
}
