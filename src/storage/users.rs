//! User repository for JSON storage
//!
//! Manages loading and saving user profiles to users.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{debug, info};

use crate::error::AllowanceError;
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, User>>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), AllowanceError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for user in file_data.users {
            data.insert(user.id, user);
        }

        debug!(count = data.len(), "loaded users");
        Ok(())
    }

    /// Save users to disk, ordered by name
    pub fn save(&self) -> Result<(), AllowanceError> {
        let data = self.data.read().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.username.to_lowercase().cmp(&b.username.to_lowercase()));

        write_json_atomic(&self.path, &UserData { users })
    }

    pub fn get(&self, id: UserId) -> Result<Option<User>, AllowanceError> {
        let data = self.data.read().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Find a user by name (case-insensitive)
    pub fn find_by_username(&self, username: &str) -> Result<Option<User>, AllowanceError> {
        let data = self.data.read().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let needle = username.trim().to_lowercase();
        Ok(data
            .values()
            .find(|u| u.username.to_lowercase() == needle)
            .cloned())
    }

    /// All users sorted by name
    pub fn get_all(&self) -> Result<Vec<User>, AllowanceError> {
        let data = self.data.read().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.username.to_lowercase().cmp(&b.username.to_lowercase()));
        Ok(users)
    }

    /// Insert or update a user
    pub fn upsert(&self, user: User) -> Result<(), AllowanceError> {
        let mut data = self.data.write().map_err(|e| {
            AllowanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        info!(user = %user.username, recurrence = %user.recurrence, "stored user");
        data.insert(user.id, user);
        Ok(())
    }
}
