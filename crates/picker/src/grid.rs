//! Day grid generation for the viewed month.

use chrono::{Datelike, NaiveDate};

use crate::bounds::DateBounds;
use crate::calendar::{ViewedMonth, WeekStart, first_weekday_of_month};

/// One cell of the day grid.
///
/// Cells are derived on every render and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Placeholder before the first day of the month. Never selectable.
    Blank,
    /// A real day of the viewed month.
    Day {
        /// The calendar date this cell represents.
        date: NaiveDate,
        /// Whether the date lies outside the bounds.
        disabled: bool,
    },
}

impl DayCell {
    /// The day of month, or `None` for a blank cell.
    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.date().map(|date| date.day())
    }

    /// The cell's date, or `None` for a blank cell.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Blank => None,
            Self::Day { date, .. } => Some(*date),
        }
    }

    /// Returns whether choosing this cell may commit a value.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Day { disabled: false, .. })
    }
}

/// Builds the ordered cells for `view`.
///
/// The grid starts with one [`DayCell::Blank`] per column before the first
/// of the month, followed by one cell per day. A day is disabled when it
/// falls before `bounds.min()` or after `bounds.max()`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_picker::{DateBounds, ViewedMonth, WeekStart};
/// use creditsearch_picker::grid::generate;
///
/// let bounds = DateBounds::new(
///     NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2003, 12, 31).unwrap(),
/// ).unwrap();
///
/// // December 2003 starts on a Monday: one blank, then 31 days.
/// let cells = generate(ViewedMonth::new(2003, 11).unwrap(), &bounds, WeekStart::Sunday);
/// assert_eq!(cells.len(), 32);
/// assert_eq!(cells[1].day(), Some(1));
/// ```
#[must_use]
pub fn generate(view: ViewedMonth, bounds: &DateBounds, week_start: WeekStart) -> Vec<DayCell> {
    let leading = first_weekday_of_month(view.year(), view.month(), week_start) as usize;
    let days = view.days();

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat_n(DayCell::Blank, leading));
    cells.extend((1..=days).filter_map(|day| view.date(day)).map(|date| DayCell::Day {
        date,
        disabled: !bounds.contains(date),
    }));
    cells
}
