//! Error types for the domain layer.

use thiserror::Error;

use crate::ports::ValenceError;

/// Errors that occur during value object or component construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: &'static str },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' is invalid: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: &'static str) -> Self {
        ValidationError::EmptyField { field }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: &'static str, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field,
            min,
            max,
            actual,
        }
    }

    /// Creates a generic invalid-value error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors produced while analyzing a message or conversation.
///
/// A valence scorer failure is propagated, never mapped to a neutral
/// result: a clean-bill-of-health default would mask a real malfunction
/// in a risk-detection path.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Valence scorer failed: {0}")]
    Valence(#[from] ValenceError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
