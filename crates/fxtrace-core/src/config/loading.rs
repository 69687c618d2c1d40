//! Configuration loading.
//!
//! Values are resolved in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults**
//! 2. **Config file** - any TOML file passed to [`load_from_path`]
//! 3. **Environment** - `FXTRACE_LOG_LEVEL` and `FXTRACE_LOG_FORMAT`, read by
//!    `LoggingConfig::load` and applied through [`apply_overrides`]

use crate::config::types::{LogFormat, LoggingConfig};
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

pub const LEVEL_ENV: &str = "FXTRACE_LOG_LEVEL";
pub const FORMAT_ENV: &str = "FXTRACE_LOG_FORMAT";

/// Parse configuration from TOML text.
pub fn from_toml_str(content: &str) -> Result<LoggingConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ConfigParseError {
        message: e.to_string(),
    })
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// A missing file is reported as [`ConfigError::ConfigNotFound`] so callers
/// can fall back to defaults; any other read failure is an IO error.
pub fn load_from_path(path: &Path) -> Result<LoggingConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::ConfigNotFound {
            path: path.display().to_string(),
        },
        _ => ConfigError::IoError { source: e },
    })?;
    from_toml_str(&content)
}

/// Apply explicit overrides; empty strings are treated as unset.
pub fn apply_overrides(
    mut config: LoggingConfig,
    level: Option<String>,
    format: Option<String>,
) -> Result<LoggingConfig, ConfigError> {
    if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
        config.level = level.trim().to_string();
    }
    if let Some(format) = format.filter(|f| !f.trim().is_empty()) {
        config.format = format.trim().parse::<LogFormat>()?;
    }
    Ok(config)
}
