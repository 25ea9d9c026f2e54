//! Read-side projections handed to the presentation layer
//!
//! Both serialize as-is for `balance --json`, with every amount as integer
//! cents (`12.50` is `1250`).

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use super::category::{CategoryKey, CategoryTable};
use super::ids::TransactionId;
use super::money::Money;
use super::recurrence::RecurrenceKind;
use super::transaction::{Transaction, TransactionType};

/// A transaction as shown to the user, with its category label resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionView {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// In cents
    pub amount: Money,
    pub description: String,
    pub category: Option<CategoryKey>,
    pub category_label: Option<String>,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_frequency: Option<RecurrenceKind>,
}

impl TransactionView {
    pub fn from_transaction(txn: &Transaction, categories: &CategoryTable) -> Self {
        Self {
            id: txn.id,
            kind: txn.kind,
            amount: txn.amount,
            description: txn.description.clone(),
            category: txn.category.clone(),
            category_label: txn
                .category
                .as_ref()
                .map(|key| categories.display_label(key).to_string()),
            date: txn.date,
            income_frequency: txn.income_frequency,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }
}

/// Totals and recent activity for one cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceSummary {
    /// In cents, as are the other amounts
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses; negative when overspent
    pub current_balance: Money,
    pub cycle_start_date: NaiveDate,
    pub cycle_end_date: NaiveDate,
    pub cycle_period_label: String,
    /// Newest first, at most five
    pub recent_transactions: Vec<TransactionView>,
    /// Expense totals keyed by category label
    pub spending_by_category: HashMap<String, Money>,
}

impl BalanceSummary {
    /// Category rows sorted by amount, largest first, then by label
    pub fn spending_sorted(&self) -> Vec<(&str, Money)> {
        let mut rows: Vec<_> = self
            .spending_by_category
            .iter()
            .map(|(label, amount)| (label.as_str(), *amount))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::UserId;

    #[test]
    fn test_view_resolves_label() {
        let table = CategoryTable::builtin();
        let date = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
        let amount = Money::from_units(120);
        let txn = Transaction::new(UserId::new(), TransactionType::Expense, amount, "Lunch", date)
            .with_category(CategoryKey::new("SCHOOL_FEES"));

        let view = TransactionView::from_transaction(&txn, &table);
        assert_eq!(view.id, txn.id);
        assert_eq!(view.amount, txn.amount);
        assert_eq!(view.date, date);
        assert_eq!(view.category_label.as_deref(), Some("School Fees"));
        assert!(!view.is_income());
    }

    #[test]
    fn test_view_without_category() {
        let table = CategoryTable::builtin();
        let date = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
        let amount = Money::from_units(5);
        let txn = Transaction::new(UserId::new(), TransactionType::Income, amount, "Gift", date);

        let view = TransactionView::from_transaction(&txn, &table);
        assert!(view.category.is_none());
        assert!(view.category_label.is_none());
    }

    #[test]
    fn test_spending_sorted() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let mut spending = HashMap::new();
        spending.insert("Transport".to_string(), Money::from_units(80));
        spending.insert("Food".to_string(), Money::from_units(120));
        spending.insert("Data".to_string(), Money::from_units(80));

        let summary = BalanceSummary {
            total_income: Money::zero(),
            total_expenses: Money::from_units(280),
            current_balance: Money::from_units(-280),
            cycle_start_date: date,
            cycle_end_date: date,
            cycle_period_label: "MAY 2025".into(),
            recent_transactions: Vec::new(),
            spending_by_category: spending,
        };

        let labels: Vec<_> = summary.spending_sorted().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Food", "Data", "Transport"]);
    }

    #[test]
    fn test_json_amounts_are_cents() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
        let snack = Money::parse("12.50").unwrap();
        let txn = Transaction::new(UserId::new(), TransactionType::Expense, snack, "Snack", date);
        let mut spending = HashMap::new();
        spending.insert("Uncategorized".to_string(), snack);

        let summary = BalanceSummary {
            total_income: Money::zero(),
            total_expenses: snack,
            current_balance: Money::zero() - snack,
            cycle_start_date: date,
            cycle_end_date: date,
            cycle_period_label: "MAY 2025".into(),
            recent_transactions: vec![TransactionView::from_transaction(
                &txn,
                &CategoryTable::builtin(),
            )],
            spending_by_category: spending,
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total_expenses"], 1250);
        assert_eq!(value["current_balance"], -1250);
        assert_eq!(value["spending_by_category"]["Uncategorized"], 1250);
        assert_eq!(value["recent_transactions"][0]["amount"], 1250);
    }
}
