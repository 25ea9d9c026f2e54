//! Category registry
//!
//! Categories are data, not code: a table of `{ key, display_label, is_income }`
//! rows loaded once and handed to whoever needs labels or listings. The built-in
//! table is what `init` writes to `categories.json`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Short upper-case category tag, e.g. `FOOD`
///
/// Deserializing normalizes the same way [`CategoryKey::new`] does, so a
/// hand-edited `"pets"` in `categories.json` still matches `PETS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Normalise user input: trimmed, upper-case, spaces become underscores
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(key.as_ref().trim().to_uppercase().replace([' ', '-'], "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CategoryKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the category registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub key: CategoryKey,
    pub display_label: String,
    #[serde(default)]
    pub is_income: bool,
}

impl CategoryInfo {
    pub fn new(key: &str, display_label: &str, is_income: bool) -> Self {
        Self {
            key: CategoryKey::new(key),
            display_label: display_label.to_string(),
            is_income,
        }
    }

    pub fn is_expense(&self) -> bool {
        !self.is_income
    }

    /// Validate the row
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.key.as_str().is_empty() {
            return Err(CategoryValidationError::EmptyKey);
        }

        if self.display_label.trim().is_empty() {
            return Err(CategoryValidationError::EmptyLabel(self.key.to_string()));
        }

        Ok(())
    }
}

/// Which side of the ledger to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl CategoryFilter {
    pub fn matches(&self, info: &CategoryInfo) -> bool {
        match self {
            Self::All => true,
            Self::Income => info.is_income,
            Self::Expense => info.is_expense(),
        }
    }
}

/// The full category registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    categories: Vec<CategoryInfo>,
}

impl CategoryTable {
    pub fn new(categories: Vec<CategoryInfo>) -> Self {
        Self { categories }
    }

    /// The default taxonomy: four income sources and nine expense categories
    pub fn builtin() -> Self {
        Self::new(vec![
            CategoryInfo::new("ALLOWANCE", "Allowance", true),
            CategoryInfo::new("SALARY", "Salary", true),
            CategoryInfo::new("GIFTS", "Gifts", true),
            CategoryInfo::new("OTHER_INCOME", "Other Income", true),
            CategoryInfo::new("FOOD", "Food", false),
            CategoryInfo::new("TRANSPORT", "Transport", false),
            CategoryInfo::new("DATA", "Data", false),
            CategoryInfo::new("SCHOOL_FEES", "School Fees", false),
            CategoryInfo::new("ENTERTAINMENT", "Entertainment", false),
            CategoryInfo::new("RENT", "Rent", false),
            CategoryInfo::new("UTILITIES", "Utilities", false),
            CategoryInfo::new("SHOPPING", "Shopping", false),
            CategoryInfo::new("MISC", "Misc", false),
        ])
    }

    pub fn all(&self) -> &[CategoryInfo] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, key: &CategoryKey) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| &c.key == key)
    }

    pub fn contains(&self, key: &CategoryKey) -> bool {
        self.get(key).is_some()
    }

    /// Display label for a key; unknown keys label themselves
    pub fn display_label<'a>(&'a self, key: &'a CategoryKey) -> &'a str {
        self.get(key)
            .map(|c| c.display_label.as_str())
            .unwrap_or_else(|| key.as_str())
    }

    /// Rows matching the filter, sorted by display label
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<CategoryInfo> {
        let mut rows: Vec<_> = self
            .categories
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.display_label.cmp(&b.display_label));
        rows
    }

    /// Validate every row and reject duplicate keys
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        for (i, info) in self.categories.iter().enumerate() {
            info.validate()?;
            if self.categories[..i].iter().any(|c| c.key == info.key) {
                return Err(CategoryValidationError::DuplicateKey(info.key.to_string()));
            }
        }
        Ok(())
    }
}

/// Validation errors for category rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyKey,
    EmptyLabel(String),
    DuplicateKey(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "Category key cannot be empty"),
            Self::EmptyLabel(key) => write!(f, "Category {} has an empty display label", key),
            Self::DuplicateKey(key) => write!(f, "Category {} is defined more than once", key),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalisation() {
        assert_eq!(CategoryKey::new(" school fees ").as_str(), "SCHOOL_FEES");
        assert_eq!(CategoryKey::new("other-income").as_str(), "OTHER_INCOME");
        assert_eq!(CategoryKey::new("food"), CategoryKey::new("FOOD"));
    }

    #[test]
    fn test_builtin_table() {
        let table = CategoryTable::builtin();
        assert_eq!(table.all().len(), 13);
        assert!(table.validate().is_ok());
        assert_eq!(table.filtered(CategoryFilter::Income).len(), 4);
        assert_eq!(table.filtered(CategoryFilter::Expense).len(), 9);
    }

    #[test]
    fn test_display_label() {
        let table = CategoryTable::builtin();
        assert_eq!(table.display_label(&CategoryKey::new("SCHOOL_FEES")), "School Fees");

        let unknown = CategoryKey::new("PETS");
        assert_eq!(table.display_label(&unknown), "PETS");
    }

    #[test]
    fn test_filtered_is_sorted_by_label() {
        let table = CategoryTable::builtin();
        let labels: Vec<_> = table
            .filtered(CategoryFilter::Income)
            .into_iter()
            .map(|c| c.display_label)
            .collect();
        assert_eq!(labels, vec!["Allowance", "Gifts", "Other Income", "Salary"]);
    }

    #[test]
    fn test_validate_rejects_duplicates_and_blanks() {
        let dup = CategoryTable::new(vec![
            CategoryInfo::new("FOOD", "Food", false),
            CategoryInfo::new("food", "Groceries", false),
        ]);
        assert_eq!(
            dup.validate(),
            Err(CategoryValidationError::DuplicateKey("FOOD".into()))
        );

        let blank = CategoryTable::new(vec![CategoryInfo::new("FOOD", "  ", false)]);
        assert!(matches!(
            blank.validate(),
            Err(CategoryValidationError::EmptyLabel(_))
        ));
    }

    #[test]
    fn test_serialization_shape() {
        let info = CategoryInfo::new("FOOD", "Food", false);
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"key":"FOOD","display_label":"Food","is_income":false}"#);
    }

    #[test]
    fn test_deserialize_normalises_key() {
        let key: CategoryKey = serde_json::from_str(r#"" school fees""#).unwrap();
        assert_eq!(key.as_str(), "SCHOOL_FEES");

        let info: CategoryInfo =
            serde_json::from_str(r#"{"key":"pets","display_label":"Pets"}"#).unwrap();
        assert_eq!(info.key, CategoryKey::new("PETS"));
        assert!(info.is_expense());
    }
}
