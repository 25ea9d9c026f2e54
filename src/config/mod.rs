//! Configuration module for allowance-cli
//!
//! - platform path resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::AllowancePaths;
pub use settings::Settings;
