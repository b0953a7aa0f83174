//! Keyboard cursor for the open date picker.
//!
//! The picker controller only understands selections ("pick day 14"). The
//! cursor is the terminal's stand-in for a pointer: arrow keys move it over
//! the visible panel and Enter turns its position into a selection.

use chrono::{Datelike, NaiveDate, TimeDelta};
use creditsearch_picker::{DatePicker, Panel, PickerMessage, ViewedMonth};

/// Number of columns in the month and year pickers.
pub const QUICK_PICK_COLUMNS: i32 = 4;

/// Cursor position for each picker panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerCursor {
    date: NaiveDate,
    month: u32,
    year: i32,
}

impl PickerCursor {
    /// Places the cursor on the selected date, or the first day of the
    /// viewed month when nothing is selected.
    #[must_use]
    pub fn new(picker: &DatePicker) -> Self {
        let view = picker.viewed_month();
        let date = picker
            .selected_date()
            .filter(|date| ViewedMonth::of(*date) == view)
            .or_else(|| view.date(1))
            .unwrap_or_else(|| picker.bounds().min());
        let mut cursor = Self {
            date,
            month: view.month(),
            year: view.year(),
        };
        cursor.sync(picker);
        cursor
    }

    /// The highlighted day.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The highlighted month entry (zero-based).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The highlighted year entry.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Follows the picker after its view changed.
    ///
    /// The day keeps its number when the viewed month moves, shortened to
    /// the month's length and kept within the bounds.
    pub fn sync(&mut self, picker: &DatePicker) {
        let view = picker.viewed_month();
        if ViewedMonth::of(self.date) != view
            && let Some(date) = view.date(self.date.day().min(view.days()))
        {
            self.date = date;
        }
        let bounds = picker.bounds();
        self.date = self.date.clamp(bounds.min(), bounds.max());
        self.month = view.month();
        self.year = view.year();
    }

    /// Moves the cursor over the visible panel.
    ///
    /// In the day grid, `dx` moves by days and `dy` by weeks. When the day
    /// leaves the viewed month, the returned message pages the grid to
    /// follow it.
    pub fn move_by(&mut self, picker: &DatePicker, dx: i32, dy: i32) -> Option<PickerMessage> {
        match picker.state().panel()? {
            Panel::DayGrid => {
                let step = TimeDelta::days(i64::from(dx) + 7 * i64::from(dy));
                let bounds = picker.bounds();
                let target = self
                    .date
                    .checked_add_signed(step)
                    .unwrap_or(self.date)
                    .clamp(bounds.min(), bounds.max());
                self.date = target;

                let view = picker.viewed_month();
                let delta = month_index(ViewedMonth::of(target)) - month_index(view);
                (delta != 0).then_some(PickerMessage::NavigateMonth { delta })
            }
            Panel::MonthPicker => {
                let target = self.month as i32 + dx + QUICK_PICK_COLUMNS * dy;
                if (0..12).contains(&target) {
                    self.month = target as u32;
                }
                None
            }
            Panel::YearPicker => {
                let years = picker.bounds().years();
                self.year = (self.year + dx + QUICK_PICK_COLUMNS * dy)
                    .clamp(*years.start(), *years.end());
                None
            }
        }
    }

    /// The selection the cursor currently points at.
    #[must_use]
    pub fn confirm(&self, picker: &DatePicker) -> Option<PickerMessage> {
        match picker.state().panel()? {
            Panel::DayGrid => (ViewedMonth::of(self.date) == picker.viewed_month())
                .then(|| PickerMessage::SelectDay {
                    day: self.date.day(),
                }),
            Panel::MonthPicker => Some(PickerMessage::SelectMonth { month: self.month }),
            Panel::YearPicker => Some(PickerMessage::SelectYear { year: self.year }),
        }
    }
}

fn month_index(view: ViewedMonth) -> i32 {
    view.year() * 12 + view.month() as i32
}
