//! The inclusive date range a picker accepts.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::calendar::ViewedMonth;
use crate::error::{PickerError, Result};

/// An immutable, inclusive `[min, max]` date range.
///
/// Every other picker component reads the bounds to decide whether a date,
/// month, or year is eligible. The invariant `min <= max` is enforced at
/// construction.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_picker::DateBounds;
///
/// let bounds = DateBounds::new(
///     NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2003, 12, 31).unwrap(),
/// ).unwrap();
///
/// assert!(bounds.contains(NaiveDate::from_ymd_opt(1995, 6, 15).unwrap()));
/// assert!(!bounds.contains(NaiveDate::from_ymd_opt(2004, 1, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateBounds {
    min: NaiveDate,
    max: NaiveDate,
}

impl DateBounds {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidBounds`] if `min` is after `max`.
    pub fn new(min: NaiveDate, max: NaiveDate) -> Result<Self> {
        if min > max {
            return Err(PickerError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// The earliest accepted date.
    #[must_use]
    pub fn min(&self) -> NaiveDate {
        self.min
    }

    /// The latest accepted date.
    #[must_use]
    pub fn max(&self) -> NaiveDate {
        self.max
    }

    /// Returns whether `date` lies within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }

    /// Returns `date` unchanged if it is in range.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::OutOfBounds`] if the date is outside the range.
    pub fn check(&self, date: NaiveDate) -> Result<NaiveDate> {
        if self.contains(date) {
            Ok(date)
        } else {
            Err(PickerError::OutOfBounds {
                date,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// The month containing the minimum date.
    #[must_use]
    pub fn min_month(&self) -> ViewedMonth {
        ViewedMonth::of(self.min)
    }

    /// The month containing the maximum date.
    #[must_use]
    pub fn max_month(&self) -> ViewedMonth {
        ViewedMonth::of(self.max)
    }

    /// Returns whether any day of `view` lies within the range.
    #[must_use]
    pub fn contains_month(&self, view: ViewedMonth) -> bool {
        self.min_month() <= view && view <= self.max_month()
    }

    /// Clamps `view` to the first or last allowed month.
    #[must_use]
    pub fn clamp_month(&self, view: ViewedMonth) -> ViewedMonth {
        view.clamp(self.min_month(), self.max_month())
    }

    /// The years offered by the year quick picker.
    #[must_use]
    pub fn years(&self) -> RangeInclusive<i32> {
        self.min.year()..=self.max.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bounds() -> DateBounds {
        DateBounds::new(ymd(1920, 1, 1), ymd(2003, 12, 31)).unwrap()
    }

    #[test]
    fn rejects_inverted_range() {
        let err = DateBounds::new(ymd(2003, 12, 31), ymd(1920, 1, 1)).unwrap_err();
        assert!(matches!(err, PickerError::InvalidBounds { .. }));
    }

    #[test]
    fn single_day_range_is_valid() {
        let day = ymd(2000, 2, 29);
        let bounds = DateBounds::new(day, day).unwrap();
        assert!(bounds.contains(day));
        assert_eq!(bounds.min_month(), bounds.max_month());
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = bounds();
        assert!(bounds.contains(ymd(1920, 1, 1)));
        assert!(bounds.contains(ymd(2003, 12, 31)));
        assert!(!bounds.contains(ymd(1919, 12, 31)));
        assert!(!bounds.contains(ymd(2004, 1, 1)));
    }

    #[test]
    fn check_reports_out_of_bounds() {
        let bounds = bounds();
        assert_eq!(bounds.check(ymd(1990, 1, 1)), Ok(ymd(1990, 1, 1)));
        assert_eq!(
            bounds.check(ymd(2004, 1, 1)),
            Err(PickerError::OutOfBounds {
                date: ymd(2004, 1, 1),
                min: ymd(1920, 1, 1),
                max: ymd(2003, 12, 31),
            })
        );
    }

    #[test]
    fn clamp_month_snaps_to_boundary_month() {
        let bounds = DateBounds::new(ymd(1920, 3, 10), ymd(2003, 8, 20)).unwrap();
        let early = ViewedMonth::new(1901, 5).unwrap();
        let late = ViewedMonth::new(2026, 9).unwrap();
        let inside = ViewedMonth::new(1960, 4).unwrap();

        assert_eq!(bounds.clamp_month(early), ViewedMonth::new(1920, 2).unwrap());
        assert_eq!(bounds.clamp_month(late), ViewedMonth::new(2003, 7).unwrap());
        assert_eq!(bounds.clamp_month(inside), inside);
    }

    #[test]
    fn partial_boundary_months_are_contained() {
        let bounds = DateBounds::new(ymd(1920, 3, 10), ymd(2003, 8, 20)).unwrap();
        assert!(bounds.contains_month(ViewedMonth::new(1920, 2).unwrap()));
        assert!(bounds.contains_month(ViewedMonth::new(2003, 7).unwrap()));
        assert!(!bounds.contains_month(ViewedMonth::new(1920, 1).unwrap()));
        assert!(!bounds.contains_month(ViewedMonth::new(2003, 8).unwrap()));
    }

    #[test]
    fn years_cover_both_ends() {
        let years = bounds().years();
        assert_eq!(*years.start(), 1920);
        assert_eq!(*years.end(), 2003);
        assert_eq!(years.count(), 84);
    }
}
