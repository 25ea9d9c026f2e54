//! Storage layer for allowance-cli
//!
//! JSON file storage with atomic writes. Transaction reads go through the
//! [`TransactionStore`] trait so balance aggregation can run against any
//! backend that honours its ordering contract.

pub mod categories;
pub mod file_io;
pub mod init;
pub mod transactions;
pub mod users;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use transactions::TransactionRepository;
pub use users::UserRepository;

use chrono::NaiveDate;

use crate::config::paths::AllowancePaths;
use crate::error::AllowanceError;
use crate::models::{Transaction, UserId};

/// Read access to a user's transactions
///
/// "Newest first" means date descending, ties broken by creation time
/// descending.
pub trait TransactionStore {
    /// Every transaction of the user, newest first
    fn fetch_by_user_newest_first(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Transaction>, AllowanceError>;

    /// Transactions of the user dated within `start..=end`, newest first
    fn fetch_by_user_in_date_range_newest_first(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, AllowanceError>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: AllowancePaths,
    pub users: UserRepository,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    pub fn new(paths: AllowancePaths) -> Result<Self, AllowanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &AllowancePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), AllowanceError> {
        self.users.load()?;
        self.transactions.load()?;
        self.categories.load()?;
        Ok(())
    }

    /// Whether `init` has run against this data directory
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AllowancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());

        storage.load_all().unwrap();
        assert_eq!(storage.categories.table().unwrap().all().len(), 13);
    }

    #[test]
    fn test_initialized_after_init() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AllowancePaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let storage = Storage::new(paths).unwrap();
        assert!(storage.is_initialized());
    }
}
