//! Category CLI commands

use clap::{Subcommand, ValueEnum};

use crate::display::category::format_category_table;
use crate::error::AllowanceResult;
use crate::models::CategoryFilter;
use crate::services::CategoryService;
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryKindArg {
    Income,
    Expense,
}

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Only income or only expense categories
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<CategoryKindArg>,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> AllowanceResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let filter = match kind {
                None => CategoryFilter::All,
                Some(CategoryKindArg::Income) => CategoryFilter::Income,
                Some(CategoryKindArg::Expense) => CategoryFilter::Expense,
            };
            print!("{}", format_category_table(&service.list(filter)?));
        }
    }

    Ok(())
}
