//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in billsplit                              │
//! │                                                                         │
//! │  ValidationError ──┐                                                    │
//! │  CoreError ────────┼──► CliError { code, message }                      │
//! │  ConfigError ──────┤        │                                           │
//! │  io::Error ────────┘        ├── interactive: printed, session goes on   │
//! │                             └── one-shot: printed, non-zero exit        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With `--json` the error is serialized as
//! `{ "code": "VALIDATION_ERROR", "message": "..." }`.

use billsplit_core::{CoreError, ValidationError};
use serde::Serialize;

use crate::state::ConfigError;

/// Error returned from commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No order at the given position
    NotFound,

    /// Order entry or bill failed validation
    ValidationError,

    /// Malformed command or argument
    InvalidArgument,

    /// Configuration could not be loaded
    ConfigError,

    /// Reading input or writing output failed
    Io,

    /// Anything else
    Internal,
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::InvalidArgument, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::OrderNotFound { .. } => CliError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::ParticipantOutOfRange { .. } => CliError::validation(err.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O failure: {}", err);
        CliError::new(ErrorCode::Io, err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization failed: {}", err);
        CliError::internal("Could not render output")
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_codes() {
        let err: CliError = CoreError::OrderNotFound {
            position: 3,
            count: 1,
        }
        .into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: CliError = CoreError::Validation(ValidationError::InvalidOrderEntry {
            field: "item",
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Please enter a valid item name and cost.");
    }

    #[test]
    fn test_serialized_shape() {
        let err = CliError::validation("Please enter valid costs for all orders.");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Please enter valid costs for all orders.");
    }
}
