//! Error types for rate index and schedule operations.

use thiserror::Error;
use vertex_core::{Date, VertexError};

/// A specialized Result type for rate operations.
pub type RateResult<T> = Result<T, RateError>;

/// Error types for rate indices and reset schedules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// A schedule date is not strictly before the period end date.
    #[error("Schedule order violated: {field} {date} must be before end date {end_date}")]
    ScheduleOrder {
        /// Which date breaks the ordering ("start date" or "fixing date").
        field: &'static str,
        /// The offending date.
        date: Date,
        /// The period end date it was compared against.
        end_date: Date,
    },

    /// An averaging schedule was created without any reset periods.
    #[error("Averaged rate for {index} requires at least one reset period")]
    EmptySchedule {
        /// Canonical name of the index.
        index: String,
    },

    /// The index cannot be used where it was supplied.
    #[error("Index {index} not supported: {reason}")]
    IndexMismatch {
        /// Canonical name of the index.
        index: String,
        /// Why the index was rejected.
        reason: String,
    },

    /// A name did not resolve to a known index.
    #[error("Unknown rate index: '{name}'")]
    UnknownIndex {
        /// The unrecognised name.
        name: String,
    },

    /// Core validation error (missing field, invalid date).
    #[error(transparent)]
    Core(#[from] VertexError),
}

impl RateError {
    /// Creates a schedule order error.
    #[must_use]
    pub fn schedule_order(field: &'static str, date: Date, end_date: Date) -> Self {
        Self::ScheduleOrder {
            field,
            date,
            end_date,
        }
    }

    /// Creates an index mismatch error.
    #[must_use]
    pub fn index_mismatch(index: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IndexMismatch {
            index: index.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown index error.
    #[must_use]
    pub fn unknown_index(name: impl Into<String>) -> Self {
        Self::UnknownIndex { name: name.into() }
    }

    /// Returns true for chronology violations of a reset period.
    #[must_use]
    pub fn is_schedule_order(&self) -> bool {
        matches!(self, Self::ScheduleOrder { .. })
    }

    /// Returns true when a required field was absent.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::Core(err) if err.is_missing_field())
    }
}
