//! Input validation
//!
//! Pure functions that turn raw field strings into typed values or a
//! [`Rejection`]. Nothing here touches the ledger or the filesystem.

use thiserror::Error;

use crate::ledger::CategoryRegistry;
use crate::models::{Category, Money, MoneyParseError};

/// Reasons a piece of user input is refused
///
/// Every variant is recoverable: the caller shows the message and re-prompts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Category name is empty or has characters outside `[A-Za-z0-9_\- ]`
    #[error("Category names may only contain letters, digits, underscores, dashes and spaces: {0:?}")]
    InvalidFormat(String),

    /// Category name already registered (exact match)
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// Transaction description is empty
    #[error("Please provide a description for this transaction")]
    MissingDescription,

    /// Amount is not a base-10 decimal
    #[error("The transaction amount must be a decimal number without units: {0:?}")]
    NotADecimal(String),

    /// Amount has more than two fractional digits
    #[error("There can only be two digits after the decimal point: {0}")]
    TooManyDecimalPlaces(String),

    /// Amount is a decimal but its magnitude exceeds the per-transaction limit
    #[error("The transaction amount cannot be larger than 999999999999.99: {0}")]
    AmountTooLarge(String),

    /// No category exists yet to assign
    #[error("Create a category before adding transactions")]
    NoCategorySelected,

    /// Named category is not registered
    #[error("Category not found: {0}")]
    UnknownCategory(String),

    /// Year/month/day do not form a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Amount is negative while refunds are disabled
    #[error("Negative amounts are not allowed: {0}")]
    NegativeAmount(String),
}

/// Transaction fields that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields {
    pub description: String,
    pub amount: Money,
    pub category: String,
}

/// Check a category name against the allowed character set
pub fn is_valid_category_name(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' '))
}

/// Validate a new category name against the format rule and the registry
pub fn validate_category_name(
    raw: &str,
    registry: &CategoryRegistry,
) -> Result<Category, Rejection> {
    if !is_valid_category_name(raw) {
        return Err(Rejection::InvalidFormat(raw.to_string()));
    }
    if registry.contains(raw) {
        return Err(Rejection::DuplicateCategory(raw.to_string()));
    }
    Ok(Category::new_unchecked(raw))
}

/// Parse an amount string into [`Money`]
pub fn validate_amount(raw: &str) -> Result<Money, Rejection> {
    Money::parse(raw).map_err(|e| match e {
        MoneyParseError::NotADecimal(s) => Rejection::NotADecimal(s),
        MoneyParseError::TooManyDecimalPlaces(s) => Rejection::TooManyDecimalPlaces(s),
        MoneyParseError::TooLarge(s) => Rejection::AmountTooLarge(s),
    })
}

/// Validate the raw transaction fields
///
/// Checks run in a fixed order and the first failure is returned:
/// description, amount format, amount precision, category availability.
pub fn validate_transaction_fields(
    description: &str,
    amount_str: &str,
    category: &str,
    has_categories: bool,
) -> Result<ValidatedFields, Rejection> {
    let description = description.trim();
    if description.is_empty() {
        return Err(Rejection::MissingDescription);
    }

    let amount = validate_amount(amount_str)?;

    if !has_categories {
        return Err(Rejection::NoCategorySelected);
    }

    Ok(ValidatedFields {
        description: description.to_string(),
        amount,
        category: category.to_string(),
    })
}

/// Apply the refund policy to an already-parsed amount
pub fn check_amount_policy(amount: Money, allow_negative: bool) -> Result<(), Rejection> {
    if amount.is_negative() && !allow_negative {
        return Err(Rejection::NegativeAmount(amount.to_plain_string()));
    }
    Ok(())
}
