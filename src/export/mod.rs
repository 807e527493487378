//! Export module for the expense tracker
//!
//! CSV output for spreadsheets: the full transaction list, and any chart
//! series as label/amount pairs.

pub mod csv;

pub use self::csv::{
    export_series_to_file, export_transactions_to_file, write_series_csv, write_transactions_csv,
};
