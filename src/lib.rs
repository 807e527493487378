//! Expense Tracker - personal finance ledger engine
//!
//! This library records categorized expenses and answers aggregate queries
//! over them: totals and averages by month, year and category, plus
//! zero-filled series for charts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `validation`: Raw input checks and the `Rejection` taxonomy
//! - `models`: Money, categories, dates and transactions
//! - `ledger`: Category registry, year index, the `Ledger` aggregate and
//!   the persisting `LedgerStore`
//! - `reports`: Totals, averages and chart series
//! - `storage`: JSON document storage and legacy migration
//! - `audit`: Audit logging of ledger mutations
//! - `config`: Configuration and path management
//! - `logging`: Diagnostic log setup
//! - `display`, `export`, `cli`: Terminal output, CSV export and commands
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::ledger::LedgerStore;
//! use expense_tracker::reports::LedgerStats;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = LedgerStore::open_with_settings(&paths, &settings)?;
//! store.add_category("Food")?;
//! let total = LedgerStats::new(store.ledger()).yearly_total(2024);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;
pub mod validation;

pub use error::{LedgerError, LedgerResult};
