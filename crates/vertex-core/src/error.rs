//! Error types for the Vertex library.
//!
//! This module defines the validation errors raised while constructing
//! core values. Higher crates wrap [`VertexError`] in their own error enums.

use thiserror::Error;

/// A specialized Result type for Vertex core operations.
pub type VertexResult<T> = Result<T, VertexError>;

/// The main error type for Vertex core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VertexError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Unknown or malformed currency code.
    #[error("Invalid currency code: '{code}'")]
    InvalidCurrency {
        /// The code that could not be parsed.
        code: String,
    },

    /// A required field was not supplied when building a value.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
}

impl VertexError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid currency error.
    #[must_use]
    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrency { code: code.into() }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Returns true if this error reports an absent required field.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}

/// Unwraps a builder field, failing with [`VertexError::MissingField`] when absent.
///
/// # Errors
///
/// Returns `VertexError::MissingField` naming `field` if `value` is `None`.
pub fn require<T>(value: Option<T>, field: &'static str) -> VertexResult<T> {
    value.ok_or(VertexError::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VertexError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = VertexError::missing_field("fixingDate");
        assert_eq!(err.to_string(), "Missing required field: fixingDate");
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_require() {
        assert_eq!(require(Some(3), "value"), Ok(3));
        assert_eq!(
            require::<i32>(None, "value"),
            Err(VertexError::MissingField { field: "value" })
        );
    }

    #[test]
    fn test_invalid_currency() {
        let err = VertexError::invalid_currency("XYZ");
        assert!(!err.is_missing_field());
        assert!(err.to_string().contains("XYZ"));
    }
}
