//! Error types for date picker operations.
//!
//! Two failure kinds can come out of user input: text that is not a date at
//! all ([`ParseFailure`]) and a real date that lies outside the configured
//! bounds ([`PickerError::OutOfBounds`]). The controller treats both the same
//! way: the candidate is dropped and only the raw text buffer changes.

use chrono::NaiveDate;

/// Reasons why a piece of text could not be read as a calendar date.
///
/// None of the variants carry a partially parsed date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    /// The text does not have the fixed length of the format.
    #[error("expected {expected} characters, got {actual}")]
    WrongLength {
        /// Length required by the format.
        expected: usize,
        /// Length of the rejected text.
        actual: usize,
    },

    /// A separator was missing or misplaced.
    #[error("expected '{expected}' at position {position}")]
    MissingSeparator {
        /// Character offset where the separator should be.
        position: usize,
        /// The configured separator.
        expected: char,
    },

    /// A component contained something other than ASCII digits.
    #[error("date components must be numeric")]
    NotNumeric,

    /// The month is not in `1..=12`.
    #[error("month is out of range")]
    InvalidMonth,

    /// The day does not exist in the given month.
    #[error("day does not exist in that month")]
    InvalidDay,
}

/// Errors that can occur while building or driving a date picker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// The text is not a well-formed date.
    #[error("invalid date: {0}")]
    Parse(#[from] ParseFailure),

    /// The date is well-formed but outside the allowed range.
    #[error("{date} is outside the allowed range {min} to {max}")]
    OutOfBounds {
        /// The rejected date.
        date: NaiveDate,
        /// Inclusive lower bound.
        min: NaiveDate,
        /// Inclusive upper bound.
        max: NaiveDate,
    },

    /// Bounds were constructed with the minimum after the maximum.
    #[error("minimum date {min} is after maximum date {max}")]
    InvalidBounds {
        /// Requested lower bound.
        min: NaiveDate,
        /// Requested upper bound.
        max: NaiveDate,
    },
}

/// A specialized Result type for date picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;
