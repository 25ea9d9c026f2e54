//! User CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::user::{format_user_details, format_user_list};
use crate::error::{AllowanceError, AllowanceResult};
use crate::models::RecurrenceKind;
use crate::services::UserService;
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Register {
        /// Username
        name: String,
        /// Cycle preference (weekly or monthly); defaults to the configured default
        #[arg(long)]
        cycle: Option<String>,
    },

    /// Show a user's profile
    Show {
        /// Username
        name: String,
    },

    /// Change a user's cycle preference
    #[command(name = "set-cycle")]
    SetCycle {
        /// Username
        name: String,
        /// weekly or monthly
        cycle: String,
    },

    /// List all users
    List,
}

pub(crate) fn parse_recurrence(s: &str) -> AllowanceResult<RecurrenceKind> {
    s.parse::<RecurrenceKind>()
        .map_err(|e| AllowanceError::Validation(e.to_string()))
}

/// Handle a user command
pub fn handle_user_command(
    storage: &Storage,
    settings: &Settings,
    cmd: UserCommands,
) -> AllowanceResult<()> {
    let service = UserService::new(storage);

    match cmd {
        UserCommands::Register { name, cycle } => {
            let recurrence = match cycle {
                Some(c) => parse_recurrence(&c)?,
                None => settings.default_recurrence,
            };
            let user = service.register(&name, recurrence)?;
            println!(
                "Registered user '{}' with a {} cycle",
                user.username,
                user.recurrence.as_str().to_lowercase()
            );
        }

        UserCommands::Show { name } => {
            let user = service.get(&name)?;
            print!("{}", format_user_details(&user));
        }

        UserCommands::SetCycle { name, cycle } => {
            let user = service.set_recurrence(&name, parse_recurrence(&cycle)?)?;
            println!(
                "User '{}' now uses a {} cycle",
                user.username,
                user.recurrence.as_str().to_lowercase()
            );
        }

        UserCommands::List => {
            print!("{}", format_user_list(&service.list()?));
        }
    }

    Ok(())
}
