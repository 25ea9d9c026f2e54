//! Storage initialization
//!
//! Handles first-run setup: directories, default settings and the built-in
//! category registry.

use tracing::info;

use crate::config::paths::AllowancePaths;
use crate::config::settings::Settings;
use crate::error::AllowanceError;

use super::categories::CategoryRepository;

/// Initialize storage for a fresh installation
///
/// Existing files are left alone, so running it twice is harmless.
pub fn initialize_storage(paths: &AllowancePaths) -> Result<(), AllowanceError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
        info!(path = %paths.settings_file().display(), "wrote default settings");
    }

    if !paths.categories_file().exists() {
        // A fresh repository holds the built-in table
        CategoryRepository::new(paths.categories_file()).save()?;
        info!(path = %paths.categories_file().display(), "wrote built-in categories");
    }

    Ok(())
}
