//! Category registry storage
//!
//! The registry lives in categories.json. A missing or empty file means the
//! built-in table.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::AllowanceError;
use crate::models::{CategoryInfo, CategoryTable};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<CategoryInfo>,
}

/// Repository for the category registry
pub struct CategoryRepository {
    path: PathBuf,
    table: RwLock<CategoryTable>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            table: RwLock::new(CategoryTable::builtin()),
        }
    }

    /// Load the registry from disk, validating it
    pub fn load(&self) -> Result<(), AllowanceError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let loaded = if file_data.categories.is_empty() {
            debug!("no category file, using built-in table");
            CategoryTable::builtin()
        } else {
            let table = CategoryTable::new(file_data.categories);
            table.validate().map_err(|e| {
                AllowanceError::Validation(format!("{} in {}", e, self.path.display()))
            })?;
            table
        };

        let mut table = self.table.write().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *table = loaded;

        debug!(count = table.all().len(), "loaded categories");
        Ok(())
    }

    /// Save the registry to disk
    pub fn save(&self) -> Result<(), AllowanceError> {
        let table = self.table.read().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = CategoryData {
            categories: table.all().to_vec(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Snapshot of the loaded registry
    pub fn table(&self) -> Result<CategoryTable, AllowanceError> {
        let table = self.table.read().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(table.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryKey;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo.load().unwrap();

        assert_eq!(repo.table().unwrap(), CategoryTable::builtin());
    }

    #[test]
    fn test_empty_file_uses_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        std::fs::write(&path, r#"{"categories": []}"#).unwrap();

        let repo = CategoryRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.table().unwrap().all().len(), 13);
    }

    #[test]
    fn test_custom_registry() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        std::fs::write(
            &path,
            r#"{"categories": [
                {"key": "PETS", "display_label": "Pets"},
                {"key": "POCKET_MONEY", "display_label": "Pocket Money", "is_income": true}
            ]}"#,
        )
        .unwrap();

        let repo = CategoryRepository::new(path);
        repo.load().unwrap();
        let table = repo.table().unwrap();
        assert_eq!(table.display_label(&CategoryKey::new("pets")), "Pets");
        assert!(table.get(&CategoryKey::new("POCKET_MONEY")).unwrap().is_income);
        assert!(!table.contains(&CategoryKey::new("FOOD")));
    }

    #[test]
    fn test_hand_edited_keys_are_normalised() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        std::fs::write(
            &path,
            r#"{"categories": [
                {"key": "pets", "display_label": "Pets"},
                {"key": "pocket money", "display_label": "Pocket Money", "is_income": true}
            ]}"#,
        )
        .unwrap();

        let repo = CategoryRepository::new(path);
        repo.load().unwrap();
        let table = repo.table().unwrap();
        assert_eq!(table.display_label(&CategoryKey::new("PETS")), "Pets");
        assert!(table.get(&CategoryKey::new("POCKET_MONEY")).unwrap().is_income);
    }

    #[test]
    fn test_keys_differing_only_in_case_are_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        std::fs::write(
            &path,
            r#"{"categories": [
                {"key": "food", "display_label": "Food"},
                {"key": "FOOD", "display_label": "Groceries"}
            ]}"#,
        )
        .unwrap();

        let repo = CategoryRepository::new(path);
        assert!(repo.load().unwrap_err().is_validation());
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        std::fs::write(
            &path,
            r#"{"categories": [
                {"key": "FOOD", "display_label": "Food"},
                {"key": "FOOD", "display_label": "Groceries"}
            ]}"#,
        )
        .unwrap();

        let repo = CategoryRepository::new(path);
        assert!(repo.load().unwrap_err().is_validation());
    }

    #[test]
    fn test_save_writes_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path.clone());
        repo.save().unwrap();

        let data: CategoryData = read_json(&path).unwrap();
        assert_eq!(data.categories.len(), 13);
    }
}
