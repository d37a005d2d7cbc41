//! Configuration errors.

use super::error_code::{self, CortexErrorCode};

/// Errors from configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {message}")]
    ParseError { message: String },

    #[error("config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl CortexErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => error_code::CONFIG_ERROR,
            ConfigError::ValidationFailed { .. } => error_code::VALIDATION_ERROR,
        }
    }
}
