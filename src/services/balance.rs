//! Balance aggregation
//!
//! Reduces the transactions of one cycle into income and expense totals, a
//! per-category expense breakdown and a short list of recent activity.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::AllowanceResult;
use crate::models::{
    BalanceSummary, CategoryTable, CyclePeriod, Money, RecurrenceKind, Transaction,
    TransactionType, TransactionView, User,
};
use crate::storage::{Storage, TransactionStore};

use super::cycle::{cycle_period_label, resolve_current_cycle};

/// How many transactions the recent-activity list holds
pub const RECENT_TRANSACTION_LIMIT: usize = 5;

/// Bucket for expenses without a category
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Pure aggregation over already-fetched transactions
pub struct BalanceAggregator<'a> {
    categories: &'a CategoryTable,
}

impl<'a> BalanceAggregator<'a> {
    pub fn new(categories: &'a CategoryTable) -> Self {
        Self { categories }
    }

    /// Summarize one cycle
    ///
    /// Both sequences are expected newest first. `fallback_transactions` is the
    /// user's whole history and only feeds the recent list when the cycle has
    /// no transactions of its own.
    pub fn aggregate(
        &self,
        recurrence: RecurrenceKind,
        cycle: &CyclePeriod,
        transactions_in_cycle: &[Transaction],
        fallback_transactions: &[Transaction],
    ) -> BalanceSummary {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut spending_by_category: HashMap<String, Money> = HashMap::new();

        for txn in transactions_in_cycle {
            match txn.kind {
                TransactionType::Income => total_income += txn.amount,
                TransactionType::Expense => {
                    total_expenses += txn.amount;
                    let label = txn
                        .category
                        .as_ref()
                        .map(|key| self.categories.display_label(key))
                        .unwrap_or(UNCATEGORIZED_LABEL);
                    *spending_by_category.entry(label.to_string()).or_default() += txn.amount;
                }
            }
        }

        let recent_source = if transactions_in_cycle.is_empty() {
            fallback_transactions
        } else {
            transactions_in_cycle
        };
        let recent_transactions = recent_source
            .iter()
            .take(RECENT_TRANSACTION_LIMIT)
            .map(|txn| TransactionView::from_transaction(txn, self.categories))
            .collect();

        BalanceSummary {
            total_income,
            total_expenses,
            current_balance: total_income - total_expenses,
            cycle_start_date: cycle.start_date,
            cycle_end_date: cycle.end_date,
            cycle_period_label: cycle_period_label(recurrence, cycle.start_date),
            recent_transactions,
            spending_by_category,
        }
    }
}

/// Resolve, fetch and aggregate the current cycle of one user
///
/// The full history is only fetched when the cycle turns out to be empty.
pub fn summarize_current_cycle<S: TransactionStore + ?Sized>(
    store: &S,
    categories: &CategoryTable,
    user: &User,
    today: NaiveDate,
) -> AllowanceResult<BalanceSummary> {
    let cycle = resolve_current_cycle(user.recurrence, today);
    let in_cycle =
        store.fetch_by_user_in_date_range_newest_first(user.id, cycle.start_date, cycle.end_date)?;

    let fallback = if in_cycle.is_empty() {
        store.fetch_by_user_newest_first(user.id)?
    } else {
        Vec::new()
    };

    debug!(
        user = %user.username,
        cycle = %cycle,
        in_cycle = in_cycle.len(),
        fallback = fallback.len(),
        "aggregating balance"
    );

    let aggregator = BalanceAggregator::new(categories);
    Ok(aggregator.aggregate(user.recurrence, &cycle, &in_cycle, &fallback))
}

/// Service for balance queries against the configured storage
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Balance summary for the cycle containing `today`
    pub fn current_balance(
        &self,
        user: &User,
        today: NaiveDate,
    ) -> AllowanceResult<BalanceSummary> {
        let categories = self.storage.categories.table()?;
        summarize_current_cycle(&self.storage.transactions, &categories, user, today)
    }
}
