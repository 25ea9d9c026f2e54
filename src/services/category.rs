//! Category service
//!
//! Read-only access to the category registry.

use crate::error::AllowanceResult;
use crate::models::{CategoryFilter, CategoryInfo, CategoryTable};
use crate::storage::Storage;

/// Service for category listings
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Categories matching `filter`, sorted by display label
    pub fn list(&self, filter: CategoryFilter) -> AllowanceResult<Vec<CategoryInfo>> {
        Ok(self.storage.categories.table()?.filtered(filter))
    }

    /// The whole registry
    pub fn table(&self) -> AllowanceResult<CategoryTable> {
        self.storage.categories.table()
    }
}
