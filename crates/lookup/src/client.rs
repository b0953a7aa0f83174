//! Postcode lookup API client implementation.
//!
//! This module provides the [`LookupClient`] struct, which exchanges the
//! configured API key for a bearer token and searches addresses by
//! postcode.

use chrono::Utc;
use creditsearch_config::LookupConfig;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::address::Address;
use crate::error::{Error, Result};
use crate::token::TokenCache;

/// User agent expected by the lookup service.
const USER_AGENT: &str = "Valid8API";

#[derive(Serialize)]
struct AuthRequest<'a> {
    #[serde(rename = "ApiKey")]
    api_key: &'a str,
}

#[derive(Serialize)]
struct PostcodeRequest<'a> {
    postcode: &'a str,
}

#[derive(Deserialize)]
struct Envelope<T> {
    result: Option<T>,
}

#[derive(Deserialize)]
struct AuthResult {
    token: String,
}

/// Address lookup client with token caching.
///
/// # Security
///
/// The API key and tokens are stored using [`SecretString`] to prevent
/// accidental logging or exposure in debug output.
///
/// # Examples
///
/// ```no_run
/// use creditsearch_config::LookupConfig;
/// use creditsearch_lookup::{LookupClient, format_address_options};
///
/// # async fn example() -> creditsearch_lookup::Result<()> {
/// let mut client = LookupClient::new(&LookupConfig::default())?;
/// let addresses = client.lookup("SW1A 2AA").await;
/// for option in format_address_options(&addresses) {
///     println!("{}", option.label);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LookupClient {
    http: reqwest::Client,
    auth_url: String,
    address_url: String,
    api_key: Option<SecretString>,
    tokens: TokenCache,
}

impl LookupClient {
    /// Creates a client from configuration.
    ///
    /// The API key is resolved with the environment override applied. A
    /// client without a key can be built, but every lookup will fail with
    /// [`Error::MissingApiKey`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    #[instrument(skip(config), fields(auth_url = %config.auth_url))]
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let api_key = config.resolved_api_key().map(SecretString::from);
        if api_key.is_none() {
            warn!("no lookup API key configured; address lookup is disabled");
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            auth_url: config.auth_url.clone(),
            address_url: config.address_url.clone(),
            api_key,
            tokens: TokenCache::new(config.token_ttl()),
        })
    }

    /// Returns whether an API key is available.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns a valid bearer token, fetching a new one if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] without a key, [`Error::Auth`] if
    /// the key is rejected, or [`Error::Http`] on transport failures.
    #[instrument(skip(self))]
    pub async fn token(&mut self) -> Result<SecretString> {
        let now = Utc::now();
        if let Some(token) = self.tokens.get(now) {
            debug!(expires_at = ?self.tokens.expires_at(), "using cached lookup token");
            return Ok(SecretString::from(token.expose_secret().to_string()));
        }

        let api_key = self.api_key.as_ref().ok_or(Error::MissingApiKey)?;
        debug!("requesting lookup token");
        let response = self
            .http
            .post(&self.auth_url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .json(&AuthRequest {
                api_key: api_key.expose_secret(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "lookup authentication failed");
            return Err(Error::Auth { status });
        }

        let envelope: Envelope<AuthResult> = response.json().await?;
        let Some(AuthResult { token }) = envelope.result else {
            warn!("token response had no result");
            return Err(Error::Auth { status });
        };

        self.tokens.store(SecretString::from(token.clone()), now);
        Ok(SecretString::from(token))
    }

    /// Looks up the addresses for `postcode`.
    ///
    /// A `401` response drops the cached token so the next call
    /// authenticates again.
    ///
    /// # Errors
    ///
    /// Returns an error if the postcode is blank, no token can be obtained,
    /// or the postcode endpoint fails.
    #[instrument(skip(self))]
    pub async fn try_lookup(&mut self, postcode: &str) -> Result<Vec<Address>> {
        let postcode = postcode.trim();
        if postcode.is_empty() {
            return Err(Error::EmptyPostcode);
        }

        let token = self.token().await?;
        let response = self
            .http
            .post(&self.address_url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .header(AUTHORIZATION, format!("bearer {}", token.expose_secret()))
            .json(&PostcodeRequest { postcode })
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.tokens.clear();
        }
        if !status.is_success() {
            warn!(%status, "address lookup failed");
            return Err(Error::Status { status });
        }

        let envelope: Envelope<Vec<Address>> = response.json().await?;
        let addresses = envelope.result.unwrap_or_default();
        debug!(count = addresses.len(), "address lookup succeeded");
        Ok(addresses)
    }

    /// Looks up the addresses for `postcode`, treating every failure as
    /// "no addresses".
    ///
    /// Failures are logged at `warn` level.
    pub async fn lookup(&mut self, postcode: &str) -> Vec<Address> {
        match self.try_lookup(postcode).await {
            Ok(addresses) => addresses,
            Err(e) => {
                warn!(error = %e, "address lookup returned no results");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config(api_key: Option<&str>) -> LookupConfig {
        LookupConfig {
            // Port 9 (discard) is closed on test machines.
            auth_url: "http://127.0.0.1:9/v1/authentication/token".to_string(),
            address_url: "http://127.0.0.1:9/v1.1/address/postcode".to_string(),
            api_key: api_key.map(str::to_string),
            timeout_secs: 2,
            ..Default::default()
        }
    }

    #[test]
    fn auth_request_uses_service_field_name() {
        let json = serde_json::to_string(&AuthRequest { api_key: "k" }).unwrap();
        assert_eq!(json, r#"{"ApiKey":"k"}"#);
    }

    #[test]
    fn envelope_tolerates_null_result() {
        let envelope: Envelope<Vec<Address>> = serde_json::from_str(r#"{"result": null}"#).unwrap();
        assert!(envelope.result.is_none());

        let envelope: Envelope<Vec<Address>> = serde_json::from_str("{}").unwrap();
        assert!(envelope.result.is_none());
    }

    #[test]
    fn envelope_reads_auth_token() {
        let envelope: Envelope<AuthResult> =
            serde_json::from_str(r#"{"result": {"token": "abc"}}"#).unwrap();
        assert_eq!(envelope.result.map(|r| r.token).as_deref(), Some("abc"));

        let envelope: Envelope<AuthResult> = serde_json::from_str("{}").unwrap();
        assert!(envelope.result.is_none());
    }

    #[test]
    fn envelope_reads_token() {
        let envelope: Envelope<AuthResult> =
            serde_json::from_str(r#"{"result": {"token": "abc", "expiresIn": 1800}}"#).unwrap();
        assert_eq!(envelope.result.unwrap().token, "abc");
    }

    #[tokio::test]
    async fn blank_postcode_is_rejected_before_any_request() {
        let mut client = LookupClient::new(&unreachable_config(Some("key"))).unwrap();
        assert!(matches!(
            client.try_lookup("   ").await,
            Err(Error::EmptyPostcode)
        ));
    }

    #[tokio::test]
    async fn unreachable_service_yields_http_error() {
        let mut client = LookupClient::new(&unreachable_config(Some("key"))).unwrap();
        assert!(matches!(
            client.try_lookup("SW1A 2AA").await,
            Err(Error::Http(_))
        ));
    }

    #[tokio::test]
    async fn lookup_swallows_errors() {
        let mut client = LookupClient::new(&unreachable_config(Some("key"))).unwrap();
        assert!(client.lookup("SW1A 2AA").await.is_empty());
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let client = LookupClient::new(&unreachable_config(Some("very-secret-key"))).unwrap();
        assert!(client.has_api_key());
        assert!(!format!("{client:?}").contains("very-secret-key"));
    }
}
