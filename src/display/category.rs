//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::CategoryInfo;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
}

/// Format categories as a table
pub fn format_category_table(categories: &[CategoryInfo]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        key: c.key.to_string(),
        label: c.display_label.clone(),
        kind: if c.is_income { "income" } else { "expense" },
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}
