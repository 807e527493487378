//! Aggregation queries for the expense tracker
//!
//! Pure reductions over the ledger's transactions: totals, averages and
//! bucketed series for charts. Nothing here mutates the ledger.

pub mod filter;
pub mod series;
pub mod stats;

pub use filter::TransactionFilter;
pub use series::{Bucket, Series};
pub use stats::{Average, LedgerStats, Summary};
