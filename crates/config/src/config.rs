//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the credit search application.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::date_field::DatePickerConfig;
use crate::error::Result;
use crate::lookup::LookupConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// The main configuration struct for the credit search application.
///
/// # Examples
///
/// ```
/// use creditsearch_config::{Config, DateLimit};
///
/// let mut config = Config::default();
/// assert!(config.validate().is_ok());
///
/// config.date_of_birth.max_date = DateLimit::Today;
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Date-of-birth picker settings.
    #[serde(default)]
    pub date_of_birth: DatePickerConfig,

    /// Postcode lookup service settings.
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl Config {
    /// Creates a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Returns the defaults when no file is found.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use creditsearch_config::Config;
    ///
    /// # async fn example() -> creditsearch_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("dates from {}", config.date_of_birth.min_date);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<()> {
        self.date_of_birth.validate()?;
        self.lookup.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_field::DateLimit;
    use crate::error::ConfigError;
    use chrono::NaiveDate;
    use creditsearch_picker::{FieldOrder, WeekStart};
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.lookup.api_key.is_none());
        assert_eq!(config, Config::new());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("creditsearch.json5");
        std::fs::write(
            &path,
            r#"
            {
                date_of_birth: {
                    min_date: "1900-01-01",
                    max_date: "today",
                    display_format: { order: "month_day_year", separator: "/" },
                    week_start: "monday",
                },
                lookup: { api_key: "test-key", timeout_secs: 5 },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        let dob = &config.date_of_birth;
        assert_eq!(dob.min_date, NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());
        assert_eq!(dob.max_date, DateLimit::Today);
        assert_eq!(dob.display_format.order, FieldOrder::MonthDayYear);
        assert_eq!(dob.display_format.separator, '/');
        assert_eq!(dob.week_start, WeekStart::Monday);
        assert_eq!(config.lookup.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.lookup.timeout_secs, 5);
    }

    #[test]
    fn load_rejects_invalid_bounds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("creditsearch.json");
        std::fs::write(
            &path,
            r#"{"date_of_birth": {"min_date": "2005-01-01", "max_date": "2003-12-31"}}"#,
        )
        .unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn load_rejects_malformed_date() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("creditsearch.json");
        std::fs::write(&path, r#"{"date_of_birth": {"max_date": "31/12/2003"}}"#).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseJson5(_))
        ));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut original = Config::default();
        original.date_of_birth.max_date = DateLimit::Today;
        original.lookup.api_key = Some("secret".to_string());

        original.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), original);
    }
}
