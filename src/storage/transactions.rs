//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json and answers
//! the per-user queries balance aggregation depends on.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::AllowanceError;
use crate::models::{Transaction, TransactionId, UserId};

use super::file_io::{read_json, write_json_atomic};
use super::TransactionStore;

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Date descending, then creation time descending
fn newest_first(a: &Transaction, b: &Transaction) -> std::cmp::Ordering {
    b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at))
}

/// Repository for transaction persistence with a per-user index
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: user_id -> transaction_ids
    by_user: RwLock<HashMap<UserId, Vec<TransactionId>>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_user: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and build the index
    pub fn load(&self) -> Result<(), AllowanceError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_user = self.by_user.write().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_user.clear();

        for txn in file_data.transactions {
            by_user.entry(txn.user_id).or_default().push(txn.id);
            data.insert(txn.id, txn);
        }

        debug!(count = data.len(), path = %self.path.display(), "loaded transactions");
        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> Result<(), AllowanceError> {
        let data = self.data.read().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(newest_first);

        let file_data = TransactionData { transactions };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, AllowanceError> {
        let data = self.data.read().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), AllowanceError> {
        let mut data = self.data.write().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_user = self.by_user.write().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(old) = data.get(&txn.id) {
            if let Some(ids) = by_user.get_mut(&old.user_id) {
                ids.retain(|&id| id != txn.id);
            }
        }

        by_user.entry(txn.user_id).or_default().push(txn.id);
        info!(id = %txn.id, user = %txn.user_id, "stored transaction");
        data.insert(txn.id, txn);

        Ok(())
    }

    pub fn count(&self) -> Result<usize, AllowanceError> {
        let data = self.data.read().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

impl TransactionStore for TransactionRepository {
    fn fetch_by_user_newest_first(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Transaction>, AllowanceError> {
        let data = self.data.read().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_user = self.by_user.read().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let ids = by_user.get(&user_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        transactions.sort_by(newest_first);
        Ok(transactions)
    }

    fn fetch_by_user_in_date_range_newest_first(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, AllowanceError> {
        let all = self.fetch_by_user_newest_first(user_id)?;
        Ok(all
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect())
    }
}
