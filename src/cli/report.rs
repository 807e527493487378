//! CLI commands for reports
//!
//! Summaries print totals and averages; series print as bar charts and can
//! be exported to CSV with `--output`.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_series_chart, format_summary, CHART_WIDTH};
use crate::error::LedgerResult;
use crate::export::export_series_to_file;
use crate::ledger::LedgerStore;
use crate::models::Month;
use crate::reports::{LedgerStats, Series, TransactionFilter};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total and average for a year, month and/or category
    Summary {
        #[arg(short, long)]
        year: i32,

        /// Month number or name
        #[arg(short, long)]
        month: Option<Month>,

        #[arg(short, long)]
        category: Option<String>,
    },

    /// Spending per calendar month of one year
    Monthly {
        #[arg(short, long)]
        year: i32,

        /// Export the series to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Lifetime spending per category
    Categories {
        /// Export the series to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let stats = LedgerStats::new(store.ledger());
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary {
            year,
            month,
            category,
        } => {
            let mut filter = TransactionFilter::new().year(year);
            filter.month = month;
            filter.category = category;

            print!("{}", format_summary(&stats.summary(&filter), symbol));
        }

        ReportCommands::Monthly { year, output } => {
            show_series(&stats.monthly_series(year), symbol, output)?;
        }

        ReportCommands::Categories { output } => {
            show_series(&stats.category_series(), symbol, output)?;
        }
    }

    Ok(())
}

fn show_series(series: &Series, symbol: &str, output: Option<PathBuf>) -> LedgerResult<()> {
    match output {
        Some(path) => {
            export_series_to_file(series, &path)?;
            println!("Exported {} rows to {}", series.len(), path.display());
        }
        None => print!("{}", format_series_chart(series, symbol, CHART_WIDTH)),
    }
    Ok(())
}
