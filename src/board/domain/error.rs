//! Error types for board domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing or editing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// A required text field has no words after trimming.
    #[error("{field} must not be empty")]
    EmptyText {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A text field exceeds its word limit.
    #[error("{field} must be at most {limit} words, got {actual}")]
    TooManyWords {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum permitted word count.
        limit: usize,
        /// Word count of the rejected value.
        actual: usize,
    },

    /// The deadline is not a `YYYY-MM-DD` calendar date.
    #[error("invalid deadline '{0}', expected YYYY-MM-DD")]
    InvalidDeadline(String),

    /// The deadline lies before the current date.
    #[error("deadline {deadline} is in the past (today is {today})")]
    DeadlineInPast {
        /// Rejected deadline.
        deadline: NaiveDate,
        /// Date the deadline was checked against.
        today: NaiveDate,
    },

    /// The task status is not one of `todo`, `doing`, `done`.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

/// Error returned while parsing task statuses from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid status '{0}', allowed: todo | doing | done")]
pub struct ParseTaskStatusError(pub String);
