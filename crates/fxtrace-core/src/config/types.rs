//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! level = "debug"
//! format = "json"
//! directives = ["hyper=warn"]
//! ```

use crate::config::defaults::{default_format, default_level};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logging configuration loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level applied to the `fxtrace` target (default: info)
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Extra `EnvFilter` directives, e.g. `"my_app=debug"`
    #[serde(default)]
    pub directives: Vec<String>,
}

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Human-readable single line output
    Text,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            _ => Err(ConfigError::InvalidFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => f.write_str("json"),
            LogFormat::Text => f.write_str("text"),
        }
    }
}
