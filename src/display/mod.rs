//! Display formatting for terminal output
//!
//! Plain-text rendering of categories, transaction listings, summaries and
//! bar charts. Every formatter takes the currency symbol from settings.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use report::{format_bar, format_series_chart, format_summary, format_years, CHART_WIDTH};
pub use transaction::{format_entry_table, format_transaction_added};
