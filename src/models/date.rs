//! Calendar types for transactions
//!
//! `Month` is a typed calendar month; `TransactionDate` is a validated
//! year/month/day triple backed by `chrono::NaiveDate`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::Rejection;

/// Earliest and latest years accepted for a transaction
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month from its number (1 = January)
    pub fn from_number(n: u32) -> Option<Self> {
        n.checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
    }

    /// Month number (1 = January)
    pub fn number(self) -> u32 {
        self as u32
    }

    /// Zero-based index, for bucketing
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Full English name
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Three-letter abbreviation, used for chart labels
    pub fn abbr(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = Rejection;

    /// Accepts `3`, `03`, `March`, `mar` and so on
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u32>() {
            return Month::from_number(n)
                .ok_or_else(|| Rejection::InvalidDate(format!("no month number {}", n)));
        }

        let lower = s.to_lowercase();
        Month::ALL
            .iter()
            .find(|m| m.name().to_lowercase() == lower || m.abbr().to_lowercase() == lower)
            .copied()
            .ok_or_else(|| Rejection::InvalidDate(format!("unknown month {:?}", s)))
    }
}

/// The date of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TransactionDate(NaiveDate);

impl TransactionDate {
    /// Build a date, rejecting days that do not exist in that month/year
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, Rejection> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Rejection::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day))
        })?;
        Self::from_naive(date)
    }

    /// Wrap a chrono date, enforcing the supported year range
    pub fn from_naive(date: NaiveDate) -> Result<Self, Rejection> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(Rejection::InvalidDate(format!(
                "year {} outside {}..={}",
                date.year(),
                MIN_YEAR,
                MAX_YEAR
            )));
        }
        Ok(Self(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> Month {
        // NaiveDate months are always 1..=12
        Month::ALL[self.0.month0() as usize]
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// ISO form, e.g. `2024-03-05`
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for TransactionDate {
    /// Long form used in listings, e.g. `2024 March 5`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year(), self.month(), self.day())
    }
}

impl FromStr for TransactionDate {
    type Err = Rejection;

    /// Parses `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| Rejection::InvalidDate(s.to_string()))?;
        Self::from_naive(date)
    }
}
