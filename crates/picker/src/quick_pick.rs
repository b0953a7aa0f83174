//! Month and year quick pickers.
//!
//! Both lists are plain derived data. The controller decides which one (if
//! any) is visible.

use crate::bounds::DateBounds;
use crate::calendar::{MONTH_ABBREVIATIONS, ViewedMonth};

/// One entry of the month picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEntry {
    /// Zero-based month index.
    pub month: u32,
    /// Abbreviated name (`Jan`..`Dec`).
    pub label: &'static str,
    /// Whether this is the viewed month.
    pub current: bool,
    /// Whether the whole month lies outside the bounds for the viewed year.
    pub disabled: bool,
}

/// One entry of the year picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearEntry {
    /// The calendar year.
    pub year: i32,
    /// Whether this is the viewed year.
    pub current: bool,
}

/// Builds the twelve month entries for the viewed year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_picker::{DateBounds, ViewedMonth};
/// use creditsearch_picker::quick_pick::month_entries;
///
/// let bounds = DateBounds::new(
///     NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2003, 12, 31).unwrap(),
/// ).unwrap();
///
/// let entries = month_entries(ViewedMonth::new(1995, 5).unwrap(), &bounds);
/// assert_eq!(entries.len(), 12);
/// assert!(entries[5].current);
/// assert_eq!(entries[5].label, "Jun");
/// ```
#[must_use]
pub fn month_entries(view: ViewedMonth, bounds: &DateBounds) -> Vec<MonthEntry> {
    MONTH_ABBREVIATIONS
        .iter()
        .zip(0u32..)
        .map(|(&label, month)| MonthEntry {
            month,
            label,
            current: month == view.month(),
            disabled: view
                .with_month(month)
                .is_none_or(|candidate| !bounds.contains_month(candidate)),
        })
        .collect()
}

/// Builds one entry per year in the bounds, oldest first.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_picker::{DateBounds, ViewedMonth};
/// use creditsearch_picker::quick_pick::year_entries;
///
/// let bounds = DateBounds::new(
///     NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2003, 12, 31).unwrap(),
/// ).unwrap();
///
/// let entries = year_entries(ViewedMonth::new(1995, 0).unwrap(), &bounds);
/// assert_eq!(entries.len(), 84);
/// assert!(entries.iter().any(|e| e.year == 1995 && e.current));
/// ```
#[must_use]
pub fn year_entries(view: ViewedMonth, bounds: &DateBounds) -> Vec<YearEntry> {
    bounds
        .years()
        .map(|year| YearEntry {
            year,
            current: year == view.year(),
        })
        .collect()
}
