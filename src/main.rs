use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_category_command, handle_export_command, handle_history_command,
    handle_import_command, handle_report_command, handle_transaction_command,
};
use expense_tracker::config::paths::DATA_DIR_ENV;
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::error::LedgerError;
use expense_tracker::ledger::LedgerStore;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense ledger",
    long_about = "Record categorized expenses and report totals, averages and \
                  per-month or per-category spending from the command line."
)]
struct Cli {
    /// Directory holding config.json, data.json and audit.log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand)]
    Category(expense_tracker::cli::CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(expense_tracker::cli::TransactionCommands),

    /// List years that have transactions
    Years,

    /// Totals, averages and charts
    #[command(subcommand)]
    Report(expense_tracker::cli::ReportCommands),

    /// Export data to CSV
    #[command(subcommand)]
    Export(expense_tracker::cli::ExportCommands),

    /// Import data from the legacy file layout
    #[command(subcommand)]
    Import(expense_tracker::cli::ImportCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    expense_tracker::logging::init();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let mut store = LedgerStore::open_with_settings(&paths, &settings)?;

    let result = match cli.command {
        Some(Commands::Category(cmd)) => handle_category_command(&mut store, cmd),
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&mut store, &settings, cmd),
        Some(Commands::Years) => {
            print!("{}", expense_tracker::display::format_years(store.years()));
            Ok(())
        }
        Some(Commands::Report(cmd)) => handle_report_command(&store, &settings, cmd),
        Some(Commands::Export(cmd)) => handle_export_command(&store, cmd),
        Some(Commands::Import(cmd)) => handle_import_command(&mut store, cmd),
        Some(Commands::History { count }) => handle_history_command(&store, count),
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            Ok(())
        }
        None => {
            println!("expense - personal expense ledger");
            println!();
            println!("Run 'expense --help' for usage information.");
            Ok(())
        }
    };

    if let Err(LedgerError::PersistenceWriteFailure(_)) = &result {
        eprintln!("Warning: the last change was NOT saved to {}", paths.ledger_file().display());
    }

    result?;
    Ok(())
}

fn print_config(paths: &TrackerPaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Ledger file:    {}", paths.ledger_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:        {}", settings.currency_symbol);
    println!("  Allow negative amounts: {}", settings.allow_negative_amounts);
    println!("  Audit log enabled:      {}", settings.audit_enabled);
}
