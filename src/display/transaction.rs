//! Transaction display formatting
//!
//! Register-style listings of transaction views.

use crate::models::{Transaction, TransactionType, TransactionView};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &TransactionView, currency: &str) -> String {
    let sign = match txn.kind {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };

    let category = txn.category_label.as_deref().unwrap_or("");
    let amount = format!("{}{}", sign, txn.amount.format_with_symbol(currency));

    format!(
        "{} {:24} {:16} {:>12}",
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.description, 24),
        truncate(category, 16),
        amount
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[TransactionView], currency: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:16} {:>12}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(65));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency));
        output.push('\n');
    }

    output
}

/// Confirmation line after recording a transaction
pub fn format_recorded(txn: &Transaction, currency: &str) -> String {
    let mut line = format!(
        "Recorded {} {} on {}: {}",
        txn.kind.to_string().to_lowercase(),
        txn.amount.format_with_symbol(currency),
        txn.date.format("%Y-%m-%d"),
        txn.description
    );
    if let Some(category) = &txn.category {
        line.push_str(&format!(" [{}]", category));
    }
    if let Some(frequency) = txn.income_frequency {
        line.push_str(&format!(" ({})", frequency.as_str().to_lowercase()));
    }
    line
}

/// Truncate a string to a maximum length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        format!("{}...", s.chars().take(max_len - 3).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryKey, CategoryTable, Money, UserId};
    use chrono::NaiveDate;

    fn view(kind: TransactionType, description: &str, category: Option<&str>) -> TransactionView {
        let date = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
        let amount = Money::from_cents(12050);
        let mut txn = Transaction::new(UserId::new(), kind, amount, description, date);
        txn.category = category.map(CategoryKey::new);
        TransactionView::from_transaction(&txn, &CategoryTable::builtin())
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn test_row_shows_sign_and_label() {
        let lunch = view(TransactionType::Expense, "Lunch", Some("FOOD"));
        let row = format_transaction_row(&lunch, "$");
        assert!(row.starts_with("2025-05-03"));
        assert!(row.contains("Lunch"));
        assert!(row.contains("Food"));
        assert!(row.ends_with("-$120.50"));

        let row = format_transaction_row(&view(TransactionType::Income, "Allowance", None), "$");
        assert!(row.ends_with("+$120.50"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_transaction_register(&[], "$"), "No transactions found.\n");
    }

    #[test]
    fn test_register_has_header() {
        let bus = view(TransactionType::Expense, "Bus", Some("TRANSPORT"));
        let output = format_transaction_register(&[bus], "€");
        assert!(output.starts_with("Date"));
        assert!(output.contains("€120.50"));
    }
}
