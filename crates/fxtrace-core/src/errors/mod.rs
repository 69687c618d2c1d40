use std::error::Error;

/// Base trait for all fxtrace errors
pub trait FxtraceError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by user input rather than the environment
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found at '{path}'")]
    ConfigNotFound { path: String },

    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid log level '{level}'. Supported levels: trace, debug, info, warn, error")]
    InvalidLevel { level: String },

    #[error("Invalid log format '{format}'. Supported formats: json, text")]
    InvalidFormat { format: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl FxtraceError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidLevel { .. } => "INVALID_LEVEL",
            ConfigError::InvalidFormat { .. } => "INVALID_FORMAT",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidLevel { .. }
                | ConfigError::InvalidFormat { .. }
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log directive '{directive}': {message}")]
    InvalidDirective { directive: String, message: String },

    #[error("Logging already initialized: {message}")]
    AlreadyInitialized { message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FxtraceError for LoggingError {
    fn error_code(&self) -> &'static str {
        match self {
            LoggingError::InvalidDirective { .. } => "INVALID_DIRECTIVE",
            LoggingError::AlreadyInitialized { .. } => "LOGGING_ALREADY_INITIALIZED",
            LoggingError::Config(inner) => inner.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            LoggingError::InvalidDirective { .. } => true,
            LoggingError::AlreadyInitialized { .. } => false,
            LoggingError::Config(inner) => inner.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_display() {
        let error = ConfigError::InvalidLevel {
            level: "loud".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid log level 'loud'. Supported levels: trace, debug, info, warn, error"
        );
        assert_eq!(error.error_code(), "INVALID_LEVEL");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_io_error_is_not_user_error() {
        let error: ConfigError = std::io::Error::other("disk gone").into();
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_logging_error_delegates_to_config() {
        let error = LoggingError::from(ConfigError::InvalidFormat {
            format: "xml".to_string(),
        });
        assert_eq!(error.error_code(), "INVALID_FORMAT");
        assert!(error.is_user_error());
        assert_eq!(
            error.to_string(),
            "Invalid log format 'xml'. Supported formats: json, text"
        );
    }
}
