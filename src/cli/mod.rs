//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod balance;
pub mod category;
pub mod transaction;
pub mod user;

pub use balance::{handle_balance_command, handle_cycle_command};
pub use category::{handle_category_command, CategoryCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use user::{handle_user_command, UserCommands};

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::{AllowanceError, AllowanceResult};
use crate::models::User;
use crate::services::UserService;
use crate::storage::Storage;

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> AllowanceResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        AllowanceError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// The user a command acts for: `--user`, then the configured default
pub fn acting_user(
    storage: &Storage,
    settings: &Settings,
    user: Option<&str>,
) -> AllowanceResult<User> {
    let name = user
        .or(settings.default_user.as_deref())
        .ok_or_else(|| {
            AllowanceError::Validation(
                "No user selected. Pass --user, set ALLOWANCE_USER \
                 or set default_user in config.json"
                    .into(),
            )
        })?;

    UserService::new(storage).get(name)
}
