//! Error types for connect-commons
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for connect-commons
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// A configuration could not be built
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A key without a default was not set
    #[error("Missing required configuration \"{name}\" which has no default value.")]
    MissingConfig {
        /// The key name
        name: String,
    },

    /// A value failed to parse or validate
    #[error("Invalid value {value} for configuration {name}: {message}")]
    InvalidConfigValue {
        /// The key name
        name: String,
        /// The rejected value as text
        value: String,
        /// Why it was rejected
        message: String,
    },

    /// A key name was defined more than once
    #[error("Configuration {name} is defined twice.")]
    DuplicateConfig {
        /// The key name
        name: String,
    },

    /// A version or version range could not be parsed
    #[error("Invalid version specification: {message}")]
    VersionSpec {
        /// What went wrong
        message: String,
    },

    // ============================================================================
    // Timing Errors
    // ============================================================================
    /// A timer operation was not valid in its current state
    #[error("Timer: {message}")]
    TimerState {
        /// What went wrong
        message: String,
    },

    /// A backoff delay was interrupted
    #[error("Delay interrupted")]
    Interrupted,

    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// A value is missing from its allow list
    #[error("{message}")]
    NotAllowed {
        /// The allow-list message
        message: String,
    },

    /// A credential file was rejected
    #[error("Invalid credentials: {message}")]
    Credential {
        /// Why it was rejected
        message: String,
    },

    /// An argument was malformed or unknown
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What went wrong
        message: String,
    },

    /// JSON could not be parsed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// An I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line-oriented input could not be parsed
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// One-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Any other error, usually with added context
    #[error("{0}")]
    Other(String),

    /// An error from code using `anyhow`
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing config error
    pub fn missing_config(name: impl Into<String>) -> Self {
        Self::MissingConfig { name: name.into() }
    }

    /// Create an invalid config value error
    pub fn invalid_value(
        name: impl Into<String>,
        value: impl std::fmt::Display,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidConfigValue {
            name: name.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }

    /// Create a timer state error
    pub fn timer_state(message: impl Into<String>) -> Self {
        Self::TimerState {
            message: message.into(),
        }
    }

    /// Create a version specification error
    pub fn version_spec(message: impl Into<String>) -> Self {
        Self::VersionSpec {
            message: message.into(),
        }
    }

    /// Create a not-allowed error
    pub fn not_allowed(message: impl Into<String>) -> Self {
        Self::NotAllowed {
            message: message.into(),
        }
    }

    /// Create a credential error
    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Check if this error is the result of an interrupted delay
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Error::Interrupted)
    }
}

/// Result type alias for connect-commons
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_config("tasks.max");
        assert_eq!(
            err.to_string(),
            "Missing required configuration \"tasks.max\" which has no default value."
        );

        let err = Error::invalid_value("tasks.max", 0, "Value must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid value 0 for configuration tasks.max: Value must be at least 1"
        );

        let err = Error::timer_state("Stopwatch is not running.");
        assert_eq!(err.to_string(), "Timer: Stopwatch is not running.");
    }

    #[test]
    fn test_is_interrupted() {
        assert!(Error::Interrupted.is_interrupted());
        assert!(!Error::config("test").is_interrupted());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_from_anyhow_is_transparent() {
        let err: Error = anyhow::anyhow!("validator failed").into();
        assert_eq!(err.to_string(), "validator failed");
    }
}
