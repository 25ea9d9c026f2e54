//! Transaction service
//!
//! Recording income and expenses, and the per-user listings the presentation
//! layer reads.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{
    CategoryKey, CyclePeriod, Money, RecurrenceKind, Transaction, TransactionType,
    TransactionView, User,
};
use crate::storage::{Storage, TransactionStore};

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub amount: Money,
    pub description: String,
    pub category: Option<CategoryKey>,
    /// Defaults to today
    pub date: Option<NaiveDate>,
    /// Kept for income, dropped for expenses
    pub income_frequency: Option<RecurrenceKind>,
}

impl CreateTransactionInput {
    pub fn new(kind: TransactionType, amount: Money, description: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
            category: None,
            date: None,
            income_frequency: None,
        }
    }
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction for `user`
    pub fn add(
        &self,
        user: &User,
        input: CreateTransactionInput,
        today: NaiveDate,
    ) -> AllowanceResult<Transaction> {
        if let Some(key) = &input.category {
            let table = self.storage.categories.table()?;
            let info = table
                .get(key)
                .ok_or_else(|| AllowanceError::category_not_found(key.as_str()))?;

            if info.is_income != (input.kind == TransactionType::Income) {
                warn!(
                    category = %key,
                    kind = %input.kind,
                    "category classification does not match transaction type"
                );
            }
        }

        let mut txn = Transaction::new(
            user.id,
            input.kind,
            input.amount,
            input.description.trim(),
            input.date.unwrap_or(today),
        );
        txn.category = input.category;
        if txn.is_income() {
            txn.income_frequency = input.income_frequency;
        }

        txn.validate()
            .map_err(|e| AllowanceError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        info!(id = %txn.id, user = %user.username, kind = %txn.kind, "recorded transaction");
        Ok(txn)
    }

    /// The user's whole history, newest first
    pub fn list_all_for_user(&self, user: &User) -> AllowanceResult<Vec<TransactionView>> {
        let table = self.storage.categories.table()?;
        Ok(self
            .storage
            .transactions
            .fetch_by_user_newest_first(user.id)?
            .iter()
            .map(|txn| TransactionView::from_transaction(txn, &table))
            .collect())
    }

    /// The user's transactions dated within `cycle`, newest first
    pub fn list_for_user_in_cycle(
        &self,
        user: &User,
        cycle: &CyclePeriod,
    ) -> AllowanceResult<Vec<TransactionView>> {
        let table = self.storage.categories.table()?;
        Ok(self
            .storage
            .transactions
            .fetch_by_user_in_date_range_newest_first(user.id, cycle.start_date, cycle.end_date)?
            .iter()
            .map(|txn| TransactionView::from_transaction(txn, &table))
            .collect())
    }
}
