//! Error types for form operations.

use thiserror::Error;

use crate::form::FieldId;

/// Errors raised while updating form values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// No field has the given form name.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The value is not one of the field's options.
    #[error("invalid value for {field}: {value:?}")]
    InvalidOption {
        /// The field being set.
        field: FieldId,
        /// The rejected value.
        value: String,
    },
}

/// Result type for form operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
