//! In-memory bearer token cache.
//!
//! The lookup service hands out tokens that expire after 30 minutes. A
//! token is reused until its configured time-to-live runs out, then
//! fetched again on the next lookup.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
struct CachedToken {
    value: SecretString,
    expires_at: DateTime<Utc>,
}

/// Caches a single bearer token until it expires.
///
/// All methods take the current time explicitly.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use chrono::{TimeDelta, Utc};
/// use secrecy::{ExposeSecret, SecretString};
/// use creditsearch_lookup::TokenCache;
///
/// let now = Utc::now();
/// let mut cache = TokenCache::new(Duration::from_secs(60));
/// cache.store(SecretString::from("abc".to_string()), now);
///
/// assert_eq!(cache.get(now).map(|t| t.expose_secret()), Some("abc"));
/// assert!(cache.get(now + TimeDelta::seconds(60)).is_none());
/// ```
#[derive(Debug)]
pub struct TokenCache {
    token: Option<CachedToken>,
    ttl: TimeDelta,
}

impl TokenCache {
    /// Creates an empty cache whose tokens live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            token: None,
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Returns the cached token if it is still valid at `now`.
    #[must_use]
    pub fn get(&self, now: DateTime<Utc>) -> Option<&SecretString> {
        self.token
            .as_ref()
            .filter(|token| now < token.expires_at)
            .map(|token| &token.value)
    }

    /// When the cached token expires, if one is cached.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.token.as_ref().map(|token| token.expires_at)
    }

    /// Caches `value`, fetched at `now`.
    pub fn store(&mut self, value: SecretString, now: DateTime<Utc>) {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        debug!(%expires_at, "caching lookup token");
        self.token = Some(CachedToken { value, expires_at });
    }

    /// Drops the cached token.
    pub fn clear(&mut self) {
        if self.token.take().is_some() {
            debug!("cleared lookup token");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn cache() -> TokenCache {
        TokenCache::new(Duration::from_secs(29 * 60))
    }

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn empty_cache_has_no_token() {
        let cache = cache();
        assert!(cache.get(Utc::now()).is_none());
        assert!(cache.expires_at().is_none());
    }

    #[test]
    fn token_valid_until_ttl() {
        let now = Utc::now();
        let mut cache = cache();
        cache.store(secret("tok"), now);

        assert!(cache.get(now).is_some());
        assert!(cache.get(now + TimeDelta::minutes(28)).is_some());
        assert!(cache.get(now + TimeDelta::minutes(29)).is_none());
        assert_eq!(cache.expires_at(), Some(now + TimeDelta::minutes(29)));
    }

    #[test]
    fn store_replaces_previous_token() {
        let now = Utc::now();
        let mut cache = cache();
        cache.store(secret("old"), now);
        cache.store(secret("new"), now + TimeDelta::minutes(1));

        let token = cache.get(now + TimeDelta::minutes(2)).unwrap();
        assert_eq!(token.expose_secret(), "new");
    }

    #[test]
    fn clear_drops_token() {
        let now = Utc::now();
        let mut cache = cache();
        cache.store(secret("tok"), now);
        cache.clear();
        assert!(cache.get(now).is_none());
        assert!(cache.expires_at().is_none());
    }

    #[test]
    fn debug_output_redacts_token() {
        let mut cache = cache();
        cache.store(secret("super-secret-token"), Utc::now());
        assert!(!format!("{cache:?}").contains("super-secret-token"));
    }
}
