//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

use chrono::NaiveDate;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// A date setting is neither `"today"` nor a `YYYY-MM-DD` date.
    #[error("invalid date {value:?}: {reason}")]
    InvalidDate {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The date range is empty.
    #[error("min_date {min} is after max_date {max}")]
    InvalidBounds {
        /// Configured minimum.
        min: NaiveDate,
        /// Configured or resolved maximum.
        max: NaiveDate,
    },

    /// The display separator would be ambiguous.
    #[error("invalid date separator {0:?}")]
    InvalidSeparator(char),

    /// Invalid lookup service settings.
    #[error("invalid lookup settings: {reason}")]
    InvalidLookup {
        /// The reason the settings are invalid.
        reason: String,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
