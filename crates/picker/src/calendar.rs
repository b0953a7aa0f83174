//! Pure calendar arithmetic.
//!
//! Months are zero-based throughout the picker (`0` is January, `11` is
//! December), matching [`chrono::Datelike::month0`].

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::bounds::DateBounds;

/// Abbreviated month names used by the month quick picker.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names used in the calendar header.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Two-letter weekday labels, starting on Sunday.
const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// The first day of the week shown in the leftmost grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Weeks run Sunday to Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday to Sunday.
    Monday,
}

impl WeekStart {
    /// Returns the corresponding chrono weekday.
    #[must_use]
    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Returns the weekday column labels in display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use creditsearch_picker::WeekStart;
    ///
    /// assert_eq!(WeekStart::Sunday.labels()[0], "Su");
    /// assert_eq!(WeekStart::Monday.labels()[6], "Su");
    /// ```
    #[must_use]
    pub fn labels(self) -> [&'static str; 7] {
        let offset = self.weekday().num_days_from_sunday() as usize;
        std::array::from_fn(|i| WEEKDAY_LABELS[(i + offset) % 7])
    }
}

/// The month currently displayed by the day grid.
///
/// Ordering compares the year first, then the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewedMonth {
    year: i32,
    month: u32,
}

impl ViewedMonth {
    /// Creates a viewed month, returning `None` if `month` is not in `0..=11`.
    ///
    /// # Examples
    ///
    /// ```
    /// use creditsearch_picker::ViewedMonth;
    ///
    /// assert!(ViewedMonth::new(2003, 11).is_some());
    /// assert!(ViewedMonth::new(2003, 12).is_none());
    /// ```
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (month < 12).then_some(Self { year, month })
    }

    /// Returns the month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    /// The zero-based month.
    #[must_use]
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the same month in another year.
    #[must_use]
    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    /// Returns another month of the same year, or `None` if `month > 11`.
    #[must_use]
    pub fn with_month(self, month: u32) -> Option<Self> {
        Self::new(self.year, month)
    }

    /// Number of days in this month.
    #[must_use]
    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Returns the given day of this month, if it exists.
    #[must_use]
    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }

    /// Full English name of the month.
    #[must_use]
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }
}

/// Returns whether `year` is a Gregorian leap year.
///
/// # Examples
///
/// ```
/// use creditsearch_picker::calendar::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(1996));
/// assert!(!is_leap_year(2003));
/// ```
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|date| date.leap_year())
}

/// Returns the number of days in a zero-based month.
///
/// Months above 11, and years chrono cannot represent, are treated as 31-day
/// months; callers only pass months taken from a [`ViewedMonth`] or a
/// validated parse.
///
/// # Examples
///
/// ```
/// use creditsearch_picker::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2000, 1), 29);
/// assert_eq!(days_in_month(2003, 1), 28);
/// assert_eq!(days_in_month(2003, 3), 30);
/// assert_eq!(days_in_month(2003, 11), 31);
/// ```
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month.saturating_add(1), 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

/// Returns the grid column (`0..=6`) of the first day of a zero-based month.
///
/// Column `0` is the configured first day of the week. Months above 11 are
/// treated as December.
///
/// # Examples
///
/// ```
/// use creditsearch_picker::WeekStart;
/// use creditsearch_picker::calendar::first_weekday_of_month;
///
/// // 1 December 2003 was a Monday.
/// assert_eq!(first_weekday_of_month(2003, 11, WeekStart::Sunday), 1);
/// assert_eq!(first_weekday_of_month(2003, 11, WeekStart::Monday), 0);
/// ```
#[must_use]
pub fn first_weekday_of_month(year: i32, month: u32, week_start: WeekStart) -> u32 {
    let start = week_start.weekday().num_days_from_sunday();
    NaiveDate::from_ymd_opt(year, month.min(11) + 1, 1)
        .map_or(0, |first| (first.weekday().num_days_from_sunday() + 7 - start) % 7)
}

/// Moves `view` by `delta` months, then clamps the result into `bounds`.
///
/// Navigation never wraps past either end of the range: stepping beyond the
/// last allowed month lands on exactly that month, so repeated steps at a
/// boundary leave the view unchanged.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_picker::{DateBounds, ViewedMonth};
/// use creditsearch_picker::calendar::add_months;
///
/// let bounds = DateBounds::new(
///     NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2003, 12, 31).unwrap(),
/// ).unwrap();
///
/// let december = ViewedMonth::new(2003, 11).unwrap();
/// assert_eq!(add_months(december, 1, &bounds), december);
/// assert_eq!(add_months(december, -1, &bounds), ViewedMonth::new(2003, 10).unwrap());
/// ```
#[must_use]
pub fn add_months(view: ViewedMonth, delta: i32, bounds: &DateBounds) -> ViewedMonth {
    let total = i64::from(view.year) * 12 + i64::from(view.month) + i64::from(delta);
    let year = total
        .div_euclid(12)
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    let shifted = ViewedMonth {
        year,
        month: total.rem_euclid(12) as u32,
    };
    bounds.clamp_month(shifted)
}
