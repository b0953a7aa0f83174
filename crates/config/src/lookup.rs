//! Address lookup service configuration.
//!
//! The lookup service is a token-authenticated HTTP API: an API key is
//! exchanged for a bearer token, which is then used for postcode searches.
//! Tokens are cached for [`LookupConfig::token_ttl_secs`], kept just below
//! the service's 30 minute token lifetime.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::resolve_api_key;
use crate::error::{ConfigError, Result};

/// Default token endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://staging-api.valid8.cloud/v1/authentication/token";

/// Default postcode search endpoint.
pub const DEFAULT_ADDRESS_URL: &str = "https://staging-api.valid8.cloud/v1.1/address/postcode";

/// Default token cache lifetime (29 minutes).
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 29 * 60;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

fn default_address_url() -> String {
    DEFAULT_ADDRESS_URL.to_string()
}

fn default_token_ttl() -> u64 {
    DEFAULT_TOKEN_TTL_SECS
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Configuration for the postcode lookup client.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use creditsearch_config::LookupConfig;
///
/// let config = LookupConfig::default();
/// assert_eq!(config.token_ttl(), Duration::from_secs(29 * 60));
/// assert!(config.api_key.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Endpoint that exchanges the API key for a bearer token.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,

    /// Endpoint that returns the addresses for a postcode.
    #[serde(default = "default_address_url")]
    pub address_url: String,

    /// API key for the lookup service.
    ///
    /// The `CREDITSEARCH_LOOKUP_API_KEY` environment variable takes
    /// precedence over this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// How long a fetched token is reused, in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            address_url: default_address_url(),
            api_key: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LookupConfig {
    /// Token cache lifetime.
    #[must_use]
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The API key to use, after applying the environment override.
    #[must_use]
    pub fn resolved_api_key(&self) -> Option<String> {
        resolve_api_key(self.api_key.as_deref())
    }

    /// Validates the lookup configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the TTL or timeout is zero, or an endpoint is
    /// not an HTTP(S) URL.
    pub fn validate(&self) -> Result<()> {
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidLookup {
                reason: "token_ttl_secs must be positive".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidLookup {
                reason: "timeout_secs must be positive".to_string(),
            });
        }
        for url in [&self.auth_url, &self.address_url] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidLookup {
                    reason: format!("{url} is not an http(s) URL"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = LookupConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let config = LookupConfig {
            token_ttl_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLookup { .. })
        ));
    }

    #[test]
    fn non_http_url_is_rejected() {
        let config = LookupConfig {
            address_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn api_key_not_serialized_when_none() {
        let json = serde_json::to_string(&LookupConfig::default()).unwrap();
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: LookupConfig = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
        assert_eq!(config.token_ttl_secs, 1740);
    }
}
