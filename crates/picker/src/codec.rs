//! Conversion between dates and their text forms.
//!
//! Two forms exist:
//!
//! - the **display** form typed and read by the user, configurable in field
//!   order and separator (`DD-MM-YYYY` by default);
//! - the **canonical** form exchanged with the host, always `YYYY-MM-DD`.
//!
//! Both are fixed width: two-digit day and month, four-digit year, two
//! single-character separators.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::days_in_month;
use crate::error::ParseFailure;

/// Number of characters in any display or canonical date.
pub const DATE_TEXT_LEN: usize = 10;

/// The order of the day, month, and year components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrder {
    /// `DD-MM-YYYY`.
    #[default]
    DayMonthYear,
    /// `MM-DD-YYYY`.
    MonthDayYear,
    /// `YYYY-MM-DD`.
    YearMonthDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Day,
    Month,
    Year,
}

impl Component {
    fn width(self) -> usize {
        match self {
            Self::Year => 4,
            Self::Day | Self::Month => 2,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Day => "DD",
            Self::Month => "MM",
            Self::Year => "YYYY",
        }
    }
}

impl FieldOrder {
    fn components(self) -> [Component; 3] {
        match self {
            Self::DayMonthYear => [Component::Day, Component::Month, Component::Year],
            Self::MonthDayYear => [Component::Month, Component::Day, Component::Year],
            Self::YearMonthDay => [Component::Year, Component::Month, Component::Day],
        }
    }
}

fn default_separator() -> char {
    '-'
}

/// A fixed-width display format.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_picker::DisplayFormat;
///
/// let format = DisplayFormat::default();
/// let date = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
///
/// assert_eq!(format.to_display(date), "29-02-2000");
/// assert_eq!(format.parse("29-02-2000"), Ok(date));
/// assert!(format.parse("29-02-2003").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayFormat {
    /// Component order.
    #[serde(default)]
    pub order: FieldOrder,
    /// Character placed between components.
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            order: FieldOrder::DayMonthYear,
            separator: default_separator(),
        }
    }
}

impl DisplayFormat {
    /// The `YYYY-MM-DD` form used for committed values.
    pub const CANONICAL: Self = Self {
        order: FieldOrder::YearMonthDay,
        separator: '-',
    };

    /// Creates a format with the given order and separator.
    #[must_use]
    pub const fn new(order: FieldOrder, separator: char) -> Self {
        Self { order, separator }
    }

    /// Number of characters a complete date occupies.
    #[must_use]
    pub fn expected_len(&self) -> usize {
        DATE_TEXT_LEN
    }

    /// Placeholder text such as `DD-MM-YYYY`.
    #[must_use]
    pub fn placeholder(&self) -> String {
        let separator = self.separator.to_string();
        self.order
            .components()
            .map(Component::placeholder)
            .join(&separator)
    }

    /// Formats `date` with zero-padded components.
    ///
    /// Years outside `0..=9999` do not fit the fixed width and will not
    /// parse back.
    #[must_use]
    pub fn to_display(&self, date: NaiveDate) -> String {
        let mut text = String::with_capacity(DATE_TEXT_LEN);
        for (i, component) in self.order.components().into_iter().enumerate() {
            if i > 0 {
                text.push(self.separator);
            }
            let part = match component {
                Component::Day => format!("{:02}", date.day()),
                Component::Month => format!("{:02}", date.month()),
                Component::Year => format!("{:04}", date.year()),
            };
            text.push_str(&part);
        }
        text
    }

    /// Parses a complete date in this format.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseFailure`] if the text has the wrong length, a
    /// separator is missing, a component is not numeric, or the components do
    /// not form a real calendar date.
    pub fn parse(&self, text: &str) -> Result<NaiveDate, ParseFailure> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != DATE_TEXT_LEN {
            return Err(ParseFailure::WrongLength {
                expected: DATE_TEXT_LEN,
                actual: chars.len(),
            });
        }

        let (mut day, mut month, mut year) = (0, 0, 0);
        let mut position = 0;
        for (i, component) in self.order.components().into_iter().enumerate() {
            if i > 0 {
                if chars[position] != self.separator {
                    return Err(ParseFailure::MissingSeparator {
                        position,
                        expected: self.separator,
                    });
                }
                position += 1;
            }

            let end = position + component.width();
            let value = parse_digits(&chars[position..end])?;
            match component {
                Component::Day => day = value,
                Component::Month => month = value,
                Component::Year => year = value,
            }
            position = end;
        }

        if !(1..=12).contains(&month) {
            return Err(ParseFailure::InvalidMonth);
        }
        // Four digits always fit in an i32.
        let year = year as i32;
        if day == 0 || day > days_in_month(year, month - 1) {
            return Err(ParseFailure::InvalidDay);
        }
        NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseFailure::InvalidDay)
    }
}

fn parse_digits(digits: &[char]) -> Result<u32, ParseFailure> {
    digits.iter().try_fold(0u32, |acc, ch| {
        ch.to_digit(10)
            .filter(|_| ch.is_ascii_digit())
            .map(|digit| acc * 10 + digit)
            .ok_or(ParseFailure::NotNumeric)
    })
}

/// Formats `date` as `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_picker::codec::to_canonical;
///
/// let date = NaiveDate::from_ymd_opt(1995, 6, 7).unwrap();
/// assert_eq!(to_canonical(date), "1995-06-07");
/// ```
#[must_use]
pub fn to_canonical(date: NaiveDate) -> String {
    DisplayFormat::CANONICAL.to_display(date)
}

/// Parses a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns a [`ParseFailure`] under the same rules as
/// [`DisplayFormat::parse`].
pub fn parse_canonical(text: &str) -> Result<NaiveDate, ParseFailure> {
    DisplayFormat::CANONICAL.parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn display_pads_components() {
        let format = DisplayFormat::default();
        assert_eq!(format.to_display(ymd(1920, 1, 1)), "01-01-1920");
        assert_eq!(format.to_display(ymd(5, 3, 9)), "09-03-0005");
    }

    #[test]
    fn display_honours_order_and_separator() {
        let date = ymd(2003, 12, 31);
        let us = DisplayFormat::new(FieldOrder::MonthDayYear, '/');
        assert_eq!(us.to_display(date), "12/31/2003");
        assert_eq!(us.placeholder(), "MM/DD/YYYY");

        let iso = DisplayFormat::new(FieldOrder::YearMonthDay, '.');
        assert_eq!(iso.to_display(date), "2003.12.31");
    }

    #[test]
    fn default_placeholder() {
        assert_eq!(DisplayFormat::default().placeholder(), "DD-MM-YYYY");
    }

    #[test]
    fn canonical_format() {
        assert_eq!(to_canonical(ymd(2000, 2, 29)), "2000-02-29");
        assert_eq!(parse_canonical("2000-02-29"), Ok(ymd(2000, 2, 29)));
        assert!(parse_canonical("29-02-2000").is_err());
    }

    #[test]
    fn rejects_non_leap_february_29() {
        let format = DisplayFormat::default();
        assert_eq!(format.parse("29-02-2003"), Err(ParseFailure::InvalidDay));
        assert_eq!(format.parse("29-02-1900"), Err(ParseFailure::InvalidDay));
        assert_eq!(format.parse("29-02-2000"), Ok(ymd(2000, 2, 29)));
    }

    #[test]
    fn rejects_impossible_components() {
        let format = DisplayFormat::default();
        assert_eq!(format.parse("31-04-2001"), Err(ParseFailure::InvalidDay));
        assert_eq!(format.parse("00-01-2001"), Err(ParseFailure::InvalidDay));
        assert_eq!(format.parse("01-13-2001"), Err(ParseFailure::InvalidMonth));
        assert_eq!(format.parse("01-00-2001"), Err(ParseFailure::InvalidMonth));
    }

    #[test]
    fn rejects_wrong_shape() {
        let format = DisplayFormat::default();
        assert_eq!(
            format.parse("1-1-2001"),
            Err(ParseFailure::WrongLength {
                expected: 10,
                actual: 8
            })
        );
        assert_eq!(
            format.parse("01/01/2001"),
            Err(ParseFailure::MissingSeparator {
                position: 2,
                expected: '-'
            })
        );
        assert_eq!(
            format.parse("010-1-2001"),
            Err(ParseFailure::MissingSeparator {
                position: 2,
                expected: '-'
            })
        );
        assert_eq!(format.parse("0a-01-2001"), Err(ParseFailure::NotNumeric));
        assert_eq!(format.parse("+1-01-2001"), Err(ParseFailure::NotNumeric));
        assert_eq!(format.parse(""), Err(ParseFailure::WrongLength { expected: 10, actual: 0 }));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric to Unicode but not to the codec.
        let format = DisplayFormat::default();
        assert_eq!(format.parse("٠١-01-2001"), Err(ParseFailure::NotNumeric));
    }

    #[test]
    fn serde_defaults() {
        let format: DisplayFormat = serde_json::from_str("{}").unwrap();
        assert_eq!(format, DisplayFormat::default());

        let format: DisplayFormat =
            serde_json::from_str(r#"{"order": "month_day_year", "separator": "/"}"#).unwrap();
        assert_eq!(format, DisplayFormat::new(FieldOrder::MonthDayYear, '/'));
    }

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (0i32..=9999, 1u32..=12, 1u32..=31)
            .prop_filter_map("real date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    }

    fn any_format() -> impl Strategy<Value = DisplayFormat> {
        (
            prop_oneof![
                Just(FieldOrder::DayMonthYear),
                Just(FieldOrder::MonthDayYear),
                Just(FieldOrder::YearMonthDay),
            ],
            prop_oneof![Just('-'), Just('/'), Just('.'), Just(' ')],
        )
            .prop_map(|(order, separator)| DisplayFormat::new(order, separator))
    }

    proptest! {
        #[test]
        fn display_round_trips(date in any_date(), format in any_format()) {
            let text = format.to_display(date);
            prop_assert_eq!(text.chars().count(), format.expected_len());
            prop_assert_eq!(format.parse(&text), Ok(date));
        }

        #[test]
        fn canonical_round_trips(date in any_date()) {
            prop_assert_eq!(parse_canonical(&to_canonical(date)), Ok(date));
        }

        #[test]
        fn parse_never_panics(text in "\\PC{0,12}") {
            let _ = DisplayFormat::default().parse(&text);
        }
    }
}
