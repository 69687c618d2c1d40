//! Default values for configuration types.

use crate::config::types::{LogFormat, LoggingConfig};

/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_level() -> String {
    "info".to_string()
}

/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_format() -> LogFormat {
    LogFormat::Json
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            directives: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.directives.is_empty());
    }
}
