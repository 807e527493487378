//! Report formatting for terminal output
//!
//! Summaries as aligned label/value lines and series as horizontal bar
//! charts.

use crate::models::Money;
use crate::reports::{Series, Summary};

/// Bar width used by the CLI charts
pub const CHART_WIDTH: usize = 40;

/// Create a bar proportional to `value / max`
///
/// Zero and negative values get an empty bar.
pub fn format_bar(value: Money, max: Money, width: usize) -> String {
    if max.cents() <= 0 || value.cents() <= 0 {
        return " ".repeat(width);
    }

    let filled = ((value.cents() as f64 / max.cents() as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render a series as a labeled horizontal bar chart
pub fn format_series_chart(series: &Series, symbol: &str, width: usize) -> String {
    let mut output = String::new();
    output.push_str(&series.title);
    output.push('\n');
    output.push_str(&separator(series.title.chars().count()));
    output.push('\n');

    if series.is_empty() {
        output.push_str("No categories found.\n");
        return output;
    }

    let label_width = series
        .buckets
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);

    let max = series.max();
    for bucket in &series.buckets {
        output.push_str(&format!(
            "{:<label_width$}  {}  {:>12}\n",
            bucket.label,
            format_bar(bucket.amount, max, width),
            bucket.amount.format_with_symbol(symbol),
            label_width = label_width,
        ));
    }

    output.push_str(&format!(
        "{:<label_width$}  {:width$}  {:>12}\n",
        "Total",
        "",
        series.total().format_with_symbol(symbol),
        label_width = label_width,
        width = width,
    ));

    output
}

/// Render a summary as label/value lines
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", summary.filter.describe()));
    output.push_str(&format!("  Transactions: {}\n", summary.count));
    output.push_str(&format!(
        "  Total:        {}\n",
        summary.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Average:      {}\n",
        summary.average.format_with_symbol(symbol)
    ));
    output
}

/// Format the year list, one per line
pub fn format_years(years: &[i32]) -> String {
    if years.is_empty() {
        return "No transactions recorded yet.\n".to_string();
    }

    years.iter().map(|y| format!("{}\n", y)).collect()
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
