//! Transaction CLI commands

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::transaction::{format_recorded, format_transaction_register};
use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{CategoryKey, CyclePeriod, Money, RecurrenceKind, TransactionType};
use crate::services::{
    previous_cycle, resolve_current_cycle, CreateTransactionInput, TransactionService,
};
use crate::storage::Storage;

use super::user::parse_recurrence;
use super::{acting_user, parse_date};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TransactionKindArg {
    Income,
    Expense,
}

impl From<TransactionKindArg> for TransactionType {
    fn from(arg: TransactionKindArg) -> Self {
        match arg {
            TransactionKindArg::Income => TransactionType::Income,
            TransactionKindArg::Expense => TransactionType::Expense,
        }
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record income or an expense
    Add {
        /// income or expense
        #[arg(value_enum)]
        kind: TransactionKindArg,
        /// Amount (e.g., "12", "12.50", "$12.50")
        amount: String,
        /// Income source or expense note
        description: String,
        /// Category key (e.g., FOOD, SALARY)
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// How often this income recurs (weekly or monthly)
        #[arg(long)]
        frequency: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// current, previous, or a date inside the cycle to show
        #[arg(long)]
        cycle: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Which cycle a listing covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleSelector {
    Current,
    Previous,
    Containing(NaiveDate),
}

impl CycleSelector {
    fn parse(s: &str) -> AllowanceResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "current" | "this" => Ok(Self::Current),
            "previous" | "prev" | "last" => Ok(Self::Previous),
            other => parse_date(other).map(Self::Containing).map_err(|_| {
                AllowanceError::Validation(format!(
                    "Invalid cycle '{}'. Use current, previous or YYYY-MM-DD",
                    s
                ))
            }),
        }
    }

    fn resolve(self, recurrence: RecurrenceKind, today: NaiveDate) -> CyclePeriod {
        match self {
            Self::Current => resolve_current_cycle(recurrence, today),
            Self::Previous => previous_cycle(recurrence, &resolve_current_cycle(recurrence, today)),
            Self::Containing(date) => resolve_current_cycle(recurrence, date),
        }
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    user: Option<&str>,
    today: NaiveDate,
    cmd: TransactionCommands,
) -> AllowanceResult<()> {
    let user = acting_user(storage, settings, user)?;
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            description,
            category,
            date,
            frequency,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                AllowanceError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;

            let mut input = CreateTransactionInput::new(kind.into(), amount, description);
            input.category = category.map(CategoryKey::new);
            input.date = date.as_deref().map(parse_date).transpose()?;
            input.income_frequency = frequency.as_deref().map(parse_recurrence).transpose()?;

            let txn = service.add(&user, input, today)?;
            println!("{}", format_recorded(&txn, &settings.currency_symbol));
        }

        TransactionCommands::List { cycle, limit } => {
            let mut transactions = match cycle {
                Some(selector) => {
                    let cycle = CycleSelector::parse(&selector)?.resolve(user.recurrence, today);
                    service.list_for_user_in_cycle(&user, &cycle)?
                }
                None => service.list_all_for_user(&user)?,
            };

            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            print!(
                "{}",
                format_transaction_register(&transactions, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
