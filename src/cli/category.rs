//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::ledger::LedgerStore;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Create a new category
    Add {
        /// Category name (letters, digits, '_', '-' and spaces)
        name: String,
    },

    /// List categories in creation order
    List,
}

/// Handle a category command
pub fn handle_category_command(store: &mut LedgerStore, cmd: CategoryCommands) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::Add { name } => {
            let category = store.add_category(&name)?;
            println!("Created category: {}", category);
        }

        CategoryCommands::List => {
            print!("{}", format_category_list(store.categories()));
        }
    }

    Ok(())
}
