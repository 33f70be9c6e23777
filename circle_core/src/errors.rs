//! # Error Types
//!
//! Structured error types for circle_core. The calculator is a pure function,
//! so the only failure a caller normally sees is [`CalcError::InvalidInput`].
//! The `reason` carried by that variant is written for end users and is
//! surfaced verbatim by the HTTP API and the interactive page.
//!
//! ## Example
//!
//! ```rust
//! use circle_core::errors::{CalcError, CalcResult};
//!
//! fn validate_radius(radius: f64) -> CalcResult<()> {
//!     if radius <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "value",
//!             radius.to_string(),
//!             "Invalid value. Please provide a positive number.",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_radius(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for circle_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, non-numeric, unknown tag)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Generic internal error (not expected from the pure calculator)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        CalcError::Internal {
            message: message.into(),
        }
    }

    /// Message suitable for showing to an end user.
    ///
    /// Unlike `Display`, this omits the field/value diagnostics.
    pub fn user_message(&self) -> &str {
        match self {
            CalcError::InvalidInput { reason, .. } => reason,
            CalcError::Internal { .. } => "Internal server error. Please try again later.",
        }
    }

    /// Name of the offending field, if the error relates to one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } => Some(field),
            CalcError::Internal { .. } => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
