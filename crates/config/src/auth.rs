//! Lookup API key resolution.
//!
//! The API key is resolved with the following fallback chain:
//!
//! 1. `CREDITSEARCH_LOOKUP_API_KEY` environment variable (if non-empty)
//! 2. `lookup.api_key` from the config file
//! 3. No key (address lookup is disabled)

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "CREDITSEARCH_LOOKUP_API_KEY";

/// Resolves the lookup API key.
///
/// # Arguments
///
/// * `configured` - The API key from the config file, if any
///
/// # Returns
///
/// Returns `Some(key)` if a key is available, `None` otherwise.
///
/// # Examples
///
/// ```no_run
/// use creditsearch_config::auth::resolve_api_key;
///
/// let key = resolve_api_key(Some("from-config"));
/// ```
#[must_use]
pub fn resolve_api_key(configured: Option<&str>) -> Option<String> {
    resolve_api_key_from(std::env::var(API_KEY_ENV).ok(), configured)
}

/// Resolves the API key from an explicit environment value.
///
/// Empty or whitespace-only values are treated as absent at both levels.
///
/// # Examples
///
/// ```
/// use creditsearch_config::auth::resolve_api_key_from;
///
/// assert_eq!(
///     resolve_api_key_from(Some("env".to_string()), Some("file")),
///     Some("env".to_string())
/// );
/// assert_eq!(
///     resolve_api_key_from(Some(String::new()), Some("file")),
///     Some("file".to_string())
/// );
/// assert_eq!(resolve_api_key_from(None, None), None);
/// ```
#[must_use]
pub fn resolve_api_key_from(env: Option<String>, configured: Option<&str>) -> Option<String> {
    // 1. Environment override
    if let Some(key) = env.filter(|k| !k.trim().is_empty()) {
        return Some(key);
    }

    // 2. Config file
    configured
        .filter(|k| !k.trim().is_empty())
        .map(str::to_string)
}

/// Returns whether an API key is available from any source.
///
/// # Examples
///
/// ```no_run
/// use creditsearch_config::auth::has_api_key;
///
/// if !has_api_key(None) {
///     println!("address lookup disabled");
/// }
/// ```
#[must_use]
pub fn has_api_key(configured: Option<&str>) -> bool {
    resolve_api_key(configured).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_takes_precedence() {
        let key = resolve_api_key_from(Some("env-key".to_string()), Some("file-key"));
        assert_eq!(key, Some("env-key".to_string()));
    }

    #[test]
    fn falls_back_to_config() {
        let key = resolve_api_key_from(None, Some("file-key"));
        assert_eq!(key, Some("file-key".to_string()));
    }

    #[test]
    fn blank_values_are_absent() {
        assert_eq!(resolve_api_key_from(Some("  ".to_string()), Some("")), None);
    }

    #[test]
    fn has_api_key_with_configured_key() {
        assert!(has_api_key(Some("file-key")));
    }
}
