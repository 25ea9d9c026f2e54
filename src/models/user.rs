//! User profile
//!
//! Only what the ledger needs: a unique name and the cycle preference.
//! Credentials and sessions live outside this application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;
use super::recurrence::RecurrenceKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    /// Unique, compared case-insensitively
    pub username: String,

    /// Standing cycle preference
    #[serde(default)]
    pub recurrence: RecurrenceKind,

    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>, recurrence: RecurrenceKind) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            recurrence,
            created_at: Utc::now(),
        }
    }

    /// Validate the profile
    pub fn validate(&self) -> Result<(), UserValidationError> {
        let name = self.username.trim();
        if name.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }

        if name.len() > 50 {
            return Err(UserValidationError::UsernameTooLong(name.len()));
        }

        if name.chars().any(char::is_whitespace) {
            return Err(UserValidationError::WhitespaceInUsername);
        }

        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
    UsernameTooLong(usize),
    WhitespaceInUsername,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "Username cannot be empty"),
            Self::UsernameTooLong(len) => write!(f, "Username too long ({} chars, max 50)", len),
            Self::WhitespaceInUsername => write!(f, "Username cannot contain spaces"),
        }
    }
}

impl std::error::Error for UserValidationError {}
