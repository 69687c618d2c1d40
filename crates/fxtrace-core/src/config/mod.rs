//! # Configuration
//!
//! TOML configuration for the logging subscriber installed by
//! [`crate::logging::init_logging`].
//!
//! ```rust,no_run
//! use fxtrace_core::config::LoggingConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LoggingConfig::load(std::path::Path::new("logging.toml"))?;
//!     fxtrace_core::init_logging(&config)?;
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

pub use types::{LogFormat, LoggingConfig};

use crate::errors::ConfigError;
use std::path::Path;

pub const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl LoggingConfig {
    /// Load from `path` (defaults if the file is missing), apply environment
    /// overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_overrides(
            path,
            std::env::var(loading::LEVEL_ENV).ok(),
            std::env::var(loading::FORMAT_ENV).ok(),
        )
    }

    /// Same as [`LoggingConfig::load`] with explicit overrides in place of the
    /// environment.
    pub fn load_with_overrides(
        path: &Path,
        level: Option<String>,
        format: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = match loading::load_from_path(path) {
            Ok(config) => config,
            Err(ConfigError::ConfigNotFound { .. }) => LoggingConfig::default(),
            Err(e) => return Err(e),
        };
        let config = loading::apply_overrides(config, level, format)?;
        config.validate()?;
        Ok(config)
    }

    /// See [`loading::from_toml_str`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        loading::from_toml_str(content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if VALID_LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLevel {
                level: self.level.clone(),
            })
        }
    }
}
