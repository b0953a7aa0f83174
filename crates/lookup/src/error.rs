//! Error types for address lookup operations.
//!
//! This module defines the error types that can occur while exchanging the
//! API key for a token and searching addresses by postcode.

use reqwest::StatusCode;

/// Errors that can occur during address lookup operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or its body could not be decoded.
    #[error("lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// No API key is configured, so no token can be obtained.
    #[error("no lookup API key configured")]
    MissingApiKey,

    /// The token endpoint rejected the API key.
    #[error("authentication failed: {status}")]
    Auth {
        /// HTTP status returned by the token endpoint.
        status: StatusCode,
    },

    /// The postcode endpoint returned an error status.
    #[error("address lookup failed: {status}")]
    Status {
        /// HTTP status returned by the postcode endpoint.
        status: StatusCode,
    },

    /// The postcode was empty after trimming.
    #[error("postcode is empty")]
    EmptyPostcode,
}

impl Error {
    /// Returns `true` if the error means the cached token was rejected.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Status {
                status: StatusCode::UNAUTHORIZED
            }
        )
    }
}

/// A specialized Result type for address lookup operations.
pub type Result<T> = std::result::Result<T, Error>;
