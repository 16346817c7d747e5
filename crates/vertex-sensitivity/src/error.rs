//! Error types for sensitivity operations.

use thiserror::Error;
use vertex_core::VertexError;
use vertex_rates::RateError;

/// A specialized Result type for sensitivity operations.
pub type SensitivityResult<T> = Result<T, SensitivityError>;

/// Errors from sensitivity construction and aggregation setup.
///
/// Aggregation itself cannot fail; errors arise only while building
/// values or loading configuration.
#[derive(Debug, Error)]
pub enum SensitivityError {
    /// Core validation error, e.g. a missing required field.
    #[error(transparent)]
    Core(#[from] VertexError),

    /// Rate index or schedule error.
    #[error(transparent)]
    Rate(#[from] RateError),

    /// Configuration value out of range.
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Configuration text could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),
}

impl SensitivityError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true when a required field was absent.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        match self {
            Self::Core(err) => err.is_missing_field(),
            Self::Rate(err) => err.is_missing_field(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for SensitivityError {
    fn from(err: toml::de::Error) -> Self {
        SensitivityError::ConfigParse(err.to_string())
    }
}

impl From<serde_json::Error> for SensitivityError {
    fn from(err: serde_json::Error) -> Self {
        SensitivityError::ConfigParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_detection() {
        let err: SensitivityError = VertexError::missing_field("currency").into();
        assert!(err.is_missing_field());
        assert_eq!(err.to_string(), "Missing required field: currency");

        let err = SensitivityError::invalid_config("chunk_size", "must be positive");
        assert!(!err.is_missing_field());
        assert_eq!(err.to_string(), "Invalid configuration: chunk_size must be positive");
    }
}
