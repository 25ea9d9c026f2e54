//! Balance and cycle CLI commands

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::display::balance::{format_balance_summary, format_cycle};
use crate::error::AllowanceResult;
use crate::services::{cycle_period_label, resolve_current_cycle, BalanceService};
use crate::storage::Storage;

use super::acting_user;

/// Show the balance of the cycle containing `today`
pub fn handle_balance_command(
    storage: &Storage,
    settings: &Settings,
    user: Option<&str>,
    today: NaiveDate,
    json: bool,
) -> AllowanceResult<()> {
    let user = acting_user(storage, settings, user)?;
    let summary = BalanceService::new(storage).current_balance(&user, today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_balance_summary(&summary, &settings.currency_symbol));
    }

    Ok(())
}

/// Show the boundaries of the cycle containing `today`
pub fn handle_cycle_command(
    storage: &Storage,
    settings: &Settings,
    user: Option<&str>,
    today: NaiveDate,
) -> AllowanceResult<()> {
    let user = acting_user(storage, settings, user)?;
    let cycle = resolve_current_cycle(user.recurrence, today);
    let label = cycle_period_label(user.recurrence, cycle.start_date);

    print!("{}", format_cycle(&label, &cycle));
    Ok(())
}
