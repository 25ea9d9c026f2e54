//! User settings for allowance-cli
//!
//! Persisted as `config.json` in the base directory. Every field has a serde
//! default so older or hand-edited files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::AllowancePaths;
use crate::error::AllowanceError;
use crate::models::RecurrenceKind;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Cycle preference given to newly registered users
    #[serde(default)]
    pub default_recurrence: RecurrenceKind,

    /// User acting when neither `--user` nor `ALLOWANCE_USER` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Log filter used when `ALLOWANCE_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_recurrence: RecurrenceKind::default(),
            default_user: None,
            currency_symbol: default_currency(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &AllowancePaths) -> Result<Self, AllowanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AllowanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AllowanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AllowancePaths) -> Result<(), AllowanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AllowanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AllowanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
