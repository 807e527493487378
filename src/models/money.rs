//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i128) to avoid floating-point precision
//! issues. Parsing goes through `rust_decimal` so that any base-10 input is
//! accepted exactly and rejected when it carries sub-cent precision.
//!
//! A single parsed amount is bounded by [`MAX_AMOUNT`]; sums of any number of
//! such amounts stay far inside the i128 range.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Largest absolute amount accepted for one transaction, in cents
pub const MAX_AMOUNT_CENTS: i128 = 99_999_999_999_999;

/// Largest absolute amount accepted for one transaction
pub const MAX_AMOUNT: Money = Money(MAX_AMOUNT_CENTS);

/// Whole-unit digits that can appear in an accepted amount
const MAX_WHOLE_DIGITS: usize = 12;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i128);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents as i128)
    }

    /// Create a Money amount from dollars and cents
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars as i128 * 100 + cents as i128)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i128 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i128 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i128 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The exact decimal value (scale 2)
    ///
    /// Exceeding the 96-bit decimal range would take more maximum-size
    /// amounts than fit in memory.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(self.0, 2)
    }

    /// Parse a base-10 decimal string
    ///
    /// Surrounding whitespace is ignored. The value scaled by 100 must be a
    /// whole number, so `"12.340"` is accepted while `"12.345"` is not, and
    /// its magnitude may not exceed [`MAX_AMOUNT`].
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// assert_eq!(Money::parse("12.5").unwrap().cents(), 1250);
    /// assert!(Money::parse("12.345").is_err());
    /// assert!(Money::parse("1000000000000").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let (whole, fraction) = split_decimal(trimmed)
            .ok_or_else(|| MoneyParseError::NotADecimal(s.to_string()))?;

        if fraction.trim_end_matches('0').len() > 2 {
            return Err(MoneyParseError::TooManyDecimalPlaces(s.to_string()));
        }
        if whole.trim_start_matches('0').len() > MAX_WHOLE_DIGITS {
            return Err(MoneyParseError::TooLarge(s.to_string()));
        }

        let value = Decimal::from_str(trimmed)
            .map_err(|_| MoneyParseError::NotADecimal(s.to_string()))?;

        let scaled = value
            .checked_mul(Decimal::from(100))
            .ok_or_else(|| MoneyParseError::TooLarge(s.to_string()))?;

        if !scaled.fract().is_zero() {
            return Err(MoneyParseError::TooManyDecimalPlaces(s.to_string()));
        }

        let cents = scaled
            .to_i128()
            .ok_or_else(|| MoneyParseError::TooLarge(s.to_string()))?;
        if cents.abs() > MAX_AMOUNT_CENTS {
            return Err(MoneyParseError::TooLarge(s.to_string()));
        }
        Ok(Self(cents))
    }

    /// Format without a currency symbol, e.g. `-5.00`
    pub fn to_plain_string(&self) -> String {
        self.format_with_symbol("")
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

/// Split `[+-]digits[.digits]` into its whole and fractional digit runs
fn split_decimal(s: &str) -> Option<(&str, &str)> {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    (all_digits(whole) && all_digits(fraction)).then_some((whole, fraction))
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Money::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    NotADecimal(String),
    TooManyDecimalPlaces(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::NotADecimal(s) => write!(f, "Not a decimal number: {:?}", s),
            MoneyParseError::TooManyDecimalPlaces(s) => {
                write!(f, "More than two decimal places: {}", s)
            }
            MoneyParseError::TooLarge(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
