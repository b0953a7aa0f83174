//! Date-of-birth picker configuration.
//!
//! The upper bound is either a fixed date or `"today"`, resolved against
//! the local date when the form is built.
//!
//! ```json5
//! {
//!   "date_of_birth": {
//!     "min_date": "1920-01-01",
//!     "max_date": "today",
//!     "display_format": { "order": "day_month_year", "separator": "/" },
//!     "week_start": "monday"
//!   }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use creditsearch_picker::{DateBounds, DisplayFormat, WeekStart, parse_canonical};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Keyword that makes the upper bound follow the current date.
const TODAY: &str = "today";

/// An inclusive bound that is either fixed or the current date.
///
/// Serialized as `"today"` or as a `YYYY-MM-DD` string.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_config::DateLimit;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// assert_eq!("today".parse::<DateLimit>().unwrap().resolve(today), today);
///
/// let fixed: DateLimit = "2003-12-31".parse().unwrap();
/// assert_eq!(fixed.resolve(today), NaiveDate::from_ymd_opt(2003, 12, 31).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateLimit {
    /// The current local date.
    Today,
    /// A fixed calendar date.
    Fixed(NaiveDate),
}

impl DateLimit {
    /// Resolves the limit against `today`.
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Today => today,
            Self::Fixed(date) => date,
        }
    }
}

impl FromStr for DateLimit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case(TODAY) {
            return Ok(Self::Today);
        }
        parse_canonical(s)
            .map(Self::Fixed)
            .map_err(|e| ConfigError::InvalidDate {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl TryFrom<String> for DateLimit {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DateLimit> for String {
    fn from(limit: DateLimit) -> Self {
        limit.to_string()
    }
}

impl fmt::Display for DateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => f.write_str(TODAY),
            Self::Fixed(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

fn default_min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1920, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn default_max_date() -> DateLimit {
    DateLimit::Fixed(NaiveDate::from_ymd_opt(2003, 12, 31).unwrap_or(NaiveDate::MAX))
}

/// Configuration for the date-of-birth field.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_config::DatePickerConfig;
///
/// let config = DatePickerConfig::default();
/// let bounds = config.bounds(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()).unwrap();
/// assert_eq!(bounds.min(), NaiveDate::from_ymd_opt(1920, 1, 1).unwrap());
/// assert_eq!(bounds.max(), NaiveDate::from_ymd_opt(2003, 12, 31).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePickerConfig {
    /// Earliest selectable date.
    #[serde(default = "default_min_date")]
    pub min_date: NaiveDate,

    /// Latest selectable date, fixed or `"today"`.
    #[serde(default = "default_max_date")]
    pub max_date: DateLimit,

    /// How dates are shown and typed.
    #[serde(default)]
    pub display_format: DisplayFormat,

    /// First column of the day grid.
    #[serde(default)]
    pub week_start: WeekStart,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            min_date: default_min_date(),
            max_date: default_max_date(),
            display_format: DisplayFormat::default(),
            week_start: WeekStart::default(),
        }
    }
}

impl DatePickerConfig {
    /// Resolves the configured range against `today`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBounds`] if the resolved minimum is
    /// after the resolved maximum.
    pub fn bounds(&self, today: NaiveDate) -> Result<DateBounds> {
        let max = self.max_date.resolve(today);
        DateBounds::new(self.min_date, max).map_err(|_| ConfigError::InvalidBounds {
            min: self.min_date,
            max,
        })
    }

    /// Validates the parts of the configuration that do not depend on the
    /// current date.
    ///
    /// # Errors
    ///
    /// Returns an error if a fixed maximum precedes the minimum, or if the
    /// separator is a digit or whitespace.
    pub fn validate(&self) -> Result<()> {
        if let DateLimit::Fixed(max) = self.max_date
            && self.min_date > max
        {
            return Err(ConfigError::InvalidBounds {
                min: self.min_date,
                max,
            });
        }

        let separator = self.display_format.separator;
        if separator.is_ascii_digit() || separator.is_whitespace() {
            return Err(ConfigError::InvalidSeparator(separator));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditsearch_picker::FieldOrder;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn defaults_match_date_of_birth_range() {
        let config = DatePickerConfig::default();
        assert_eq!(config.min_date, ymd(1920, 1, 1));
        assert_eq!(config.max_date, DateLimit::Fixed(ymd(2003, 12, 31)));
        assert_eq!(config.display_format, DisplayFormat::default());
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn today_limit_follows_reference_date() {
        let config = DatePickerConfig {
            max_date: DateLimit::Today,
            ..Default::default()
        };
        let bounds = config.bounds(ymd(2026, 10, 19)).unwrap();
        assert_eq!(bounds.max(), ymd(2026, 10, 19));
    }

    #[test]
    fn inverted_fixed_bounds_fail_validation() {
        let config = DatePickerConfig {
            min_date: ymd(2010, 1, 1),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn min_after_today_fails_at_resolution() {
        let config = DatePickerConfig {
            min_date: ymd(2030, 1, 1),
            max_date: DateLimit::Today,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.bounds(ymd(2026, 10, 19)).is_err());
    }

    #[test]
    fn digit_separator_is_rejected() {
        let config = DatePickerConfig {
            display_format: DisplayFormat::new(FieldOrder::DayMonthYear, '0'),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSeparator('0'))
        ));
    }

    #[test]
    fn date_limit_serde() {
        assert_eq!(serde_json::to_string(&DateLimit::Today).unwrap(), "\"today\"");
        assert_eq!(
            serde_json::to_string(&DateLimit::Fixed(ymd(2003, 12, 31))).unwrap(),
            "\"2003-12-31\""
        );

        let parsed: DateLimit = serde_json::from_str("\"Today\"").unwrap();
        assert_eq!(parsed, DateLimit::Today);
        assert!(serde_json::from_str::<DateLimit>("\"31-12-2003\"").is_err());
        assert!(serde_json::from_str::<DateLimit>("\"yesterday\"").is_err());
    }

    #[test]
    fn deserialize_partial_section() {
        let config: DatePickerConfig = serde_json5::from_str(
            r#"{ max_date: "today", display_format: { order: "year_month_day" } }"#,
        )
        .unwrap();
        assert_eq!(config.min_date, ymd(1920, 1, 1));
        assert_eq!(config.max_date, DateLimit::Today);
        assert_eq!(config.display_format.order, FieldOrder::YearMonthDay);
        assert_eq!(config.display_format.separator, '-');
    }
}
