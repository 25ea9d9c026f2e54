//! User service
//!
//! Registration and the cycle preference each user keeps.

use tracing::info;

use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{RecurrenceKind, User};
use crate::storage::Storage;

/// Service for user management
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    pub fn register(&self, username: &str, recurrence: RecurrenceKind) -> AllowanceResult<User> {
        let username = username.trim();

        if self.storage.users.find_by_username(username)?.is_some() {
            return Err(AllowanceError::Duplicate {
                entity_type: "User",
                identifier: username.to_string(),
            });
        }

        let user = User::new(username, recurrence);
        user.validate()
            .map_err(|e| AllowanceError::Validation(e.to_string()))?;

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        info!(user = %user.username, "registered user");
        Ok(user)
    }

    /// Look up a user by name
    pub fn get(&self, username: &str) -> AllowanceResult<User> {
        self.storage
            .users
            .find_by_username(username)?
            .ok_or_else(|| AllowanceError::user_not_found(username.trim()))
    }

    /// Change a user's cycle preference
    pub fn set_recurrence(
        &self,
        username: &str,
        recurrence: RecurrenceKind,
    ) -> AllowanceResult<User> {
        let mut user = self.get(username)?;
        user.recurrence = recurrence;

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        Ok(user)
    }

    pub fn list(&self) -> AllowanceResult<Vec<User>> {
        self.storage.users.get_all()
    }
}
