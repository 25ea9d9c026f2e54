//! Transaction model
//!
//! An income or expense entry belonging to one user. The amount is never
//! negative; whether it adds to or subtracts from the balance is carried by
//! [`TransactionType`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryKey;
use super::ids::{TransactionId, UserId};
use super::money::Money;
use super::recurrence::RecurrenceKind;

/// Income or expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A dated income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Owner
    pub user_id: UserId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Non-negative amount
    pub amount: Money,

    /// Income source or expense note
    pub description: String,

    #[serde(default)]
    pub category: Option<CategoryKey>,

    pub date: NaiveDate,

    /// For recurring income only; informational
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_frequency: Option<RecurrenceKind>,

    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        user_id: UserId,
        kind: TransactionType,
        amount: Money,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            user_id,
            kind,
            amount,
            description: description.into(),
            category: None,
            date,
            income_frequency: None,
            created_at: Utc::now(),
        }
    }

    /// Builder-style category setter
    pub fn with_category(mut self, category: CategoryKey) -> Self {
        self.category = Some(category);
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.amount > Money::MAX_TRANSACTION {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.is_expense() && self.income_frequency.is_some() {
            return Err(TransactionValidationError::FrequencyOnExpense);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.description,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
    EmptyDescription,
    FrequencyOnExpense,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(
                    f,
                    "Amount cannot be negative ({}); use the transaction type instead",
                    amount
                )
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the limit of {}", amount, Money::MAX_TRANSACTION)
            }
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::FrequencyOnExpense => write!(f, "Only income can have a frequency"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let user = UserId::new();
        let lunch = Money::from_units(120);
        let txn = Transaction::new(user, TransactionType::Expense, lunch, "Lunch", may(3))
            .with_category(CategoryKey::new("FOOD"));

        assert_eq!(txn.user_id, user);
        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert_eq!(txn.category, Some(CategoryKey::new("FOOD")));
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let user = UserId::new();

        let negative =
            Transaction::new(user, TransactionType::Income, Money::from_cents(-1), "Pay", may(1));
        assert!(matches!(
            negative.validate(),
            Err(TransactionValidationError::NegativeAmount(_))
        ));

        let one = Money::from_units(1);
        let blank = Transaction::new(user, TransactionType::Income, one, "  ", may(1));
        assert_eq!(blank.validate(), Err(TransactionValidationError::EmptyDescription));

        let mut expense = Transaction::new(user, TransactionType::Expense, one, "Bus", may(1));
        expense.income_frequency = Some(RecurrenceKind::Weekly);
        assert_eq!(expense.validate(), Err(TransactionValidationError::FrequencyOnExpense));
    }

    #[test]
    fn test_amount_cap() {
        let user = UserId::new();
        let cap = Money::MAX_TRANSACTION;
        let at_cap = Transaction::new(user, TransactionType::Income, cap, "Pay", may(1));
        assert!(at_cap.validate().is_ok());

        let over = Money::MAX_TRANSACTION + Money::from_cents(1);
        let too_big = Transaction::new(user, TransactionType::Income, over, "Pay", may(1));
        assert_eq!(
            too_big.validate(),
            Err(TransactionValidationError::AmountTooLarge(over))
        );
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let zero = Money::zero();
        let txn = Transaction::new(UserId::new(), TransactionType::Expense, zero, "Free", may(1));
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_serialization_uses_type_field() {
        let amount = Money::from_units(500);
        let txn =
            Transaction::new(UserId::new(), TransactionType::Income, amount, "Allowance", may(1));
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["type"], "INCOME");
        assert_eq!(value["amount"], 50000);
        assert_eq!(value["date"], "2025-05-01");
        assert!(value.get("income_frequency").is_none());
    }
}
