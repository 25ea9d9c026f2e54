//! Balance summary and cycle formatting

use crate::models::{BalanceSummary, CyclePeriod};

use super::transaction::format_transaction_register;

/// Format a balance summary for the terminal
pub fn format_balance_summary(summary: &BalanceSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} ({} to {})\n",
        summary.cycle_period_label,
        summary.cycle_start_date.format("%Y-%m-%d"),
        summary.cycle_end_date.format("%Y-%m-%d")
    ));
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Income:    {:>14}\n",
        summary.total_income.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Expenses:  {:>14}\n",
        summary.total_expenses.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Balance:   {:>14}\n",
        summary.current_balance.format_with_symbol(currency)
    ));

    if !summary.spending_by_category.is_empty() {
        output.push_str("\nSpending by category:\n");
        for (label, amount) in summary.spending_sorted() {
            output.push_str(&format!(
                "  {:20} {:>12}\n",
                label,
                amount.format_with_symbol(currency)
            ));
        }
    }

    output.push_str("\nRecent transactions:\n");
    output.push_str(&format_transaction_register(&summary.recent_transactions, currency));

    output
}

/// Format cycle boundaries with their label
pub fn format_cycle(label: &str, cycle: &CyclePeriod) -> String {
    format!(
        "{}\n  Start: {}\n  End:   {}\n  Days:  {}\n",
        label,
        cycle.start_date.format("%Y-%m-%d"),
        cycle.end_date.format("%Y-%m-%d"),
        cycle.num_days()
    )
}
