//! The date picker controller.
//!
//! [`DatePicker`] is the single owner of the picker's mutable state: whether
//! it is open and which panel is visible, the viewed month, the committed
//! date, and the raw text buffer. Every interaction goes through
//! [`DatePicker::update`], which applies it synchronously and returns at
//! most one [`Commit`], the only event the host ever observes.
//!
//! # State Machine
//!
//! ```text
//!            activate / toggle
//!   Closed ─────────────────────▶ Open(DayGrid)
//!     ▲                           │   ▲      │
//!     │ day chosen,               │   │month │ toggle month label
//!     │ outside interaction,      │   │chosen▼
//!     │ toggle                    │  Open(MonthPicker)
//!     │                           │
//!     └───────────────────────── Open(YearPicker) (same shape via year label)
//! ```
//!
//! Typing is independent of the state above: a complete, valid, in-range
//! entry commits without closing anything.

use chrono::NaiveDate;
use tracing::{debug, instrument, warn};

use crate::bounds::DateBounds;
use crate::calendar::{ViewedMonth, WeekStart, add_months};
use crate::codec::{DisplayFormat, parse_canonical, to_canonical};
use crate::dismissal::{DismissalPolicy, InteractionOrigin, Panel};
use crate::error::{PickerError, Result};
use crate::grid::{self, DayCell};
use crate::message::PickerMessage;
use crate::quick_pick::{self, MonthEntry, YearEntry};

/// Whether the picker is open and, if so, which panel it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerState {
    /// Only the text field is visible.
    #[default]
    Closed,
    /// The popup is visible with the given panel.
    Open(Panel),
}

impl PickerState {
    /// Returns whether the popup is visible.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Returns the visible panel, if open.
    #[must_use]
    pub fn panel(self) -> Option<Panel> {
        match self {
            Self::Closed => None,
            Self::Open(panel) => Some(panel),
        }
    }
}

/// A committed date change, reported to the host.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_picker::{DateBounds, DateFieldProps, DatePicker, PickerMessage};
///
/// let bounds = DateBounds::new(
///     NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2003, 12, 31).unwrap(),
/// ).unwrap();
/// let props = DateFieldProps::new("Date of Birth", "dateOfBirth", bounds);
/// let mut picker = DatePicker::new(props, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
///
/// let commit = picker
///     .update(PickerMessage::EditText { text: "29-02-2000".to_string() })
///     .expect("valid date commits");
/// assert_eq!(commit.field_id, "dateOfBirth");
/// assert_eq!(commit.value, "2000-02-29");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Identifier of the field that changed.
    pub field_id: String,
    /// The new value in `YYYY-MM-DD` form.
    pub value: String,
    /// The new value as a date.
    pub date: NaiveDate,
}

/// Configuration supplied by the host form.
///
/// Only `bounds`, `format`, `week_start`, and `initial_value` affect
/// behavior; the rest is presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFieldProps {
    /// Field label.
    pub label: String,
    /// Identifier reported in every [`Commit`].
    pub field_id: String,
    /// Whether the host marks the field as required.
    pub required: bool,
    /// Accepted range.
    pub bounds: DateBounds,
    /// Optional hint shown under the field.
    pub help_text: Option<String>,
    /// Whether the host's validation currently flags the field.
    pub has_validation_error: bool,
    /// Display and typing format.
    pub format: DisplayFormat,
    /// First column of the day grid.
    pub week_start: WeekStart,
    /// Host-held value in `YYYY-MM-DD` form used to seed the picker.
    pub initial_value: Option<String>,
}

impl DateFieldProps {
    /// Creates props with default format, Sunday week start, and no initial
    /// value.
    #[must_use]
    pub fn new(label: impl Into<String>, field_id: impl Into<String>, bounds: DateBounds) -> Self {
        Self {
            label: label.into(),
            field_id: field_id.into(),
            required: false,
            bounds,
            help_text: None,
            has_validation_error: false,
            format: DisplayFormat::default(),
            week_start: WeekStart::default(),
            initial_value: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Sets the display format.
    #[must_use]
    pub fn format(mut self, format: DisplayFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the first day of the week.
    #[must_use]
    pub fn week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Seeds the picker with a canonical value held by the host.
    #[must_use]
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }
}

/// The bounded date picker.
///
/// The controller is the only writer of the selected date, the viewed month,
/// and the text buffer. Hosts read them through accessors and feed
/// interactions through [`update`](Self::update).
#[derive(Debug, Clone)]
pub struct DatePicker {
    props: DateFieldProps,
    state: PickerState,
    view: ViewedMonth,
    selected: Option<NaiveDate>,
    buffer: String,
    dismissal: DismissalPolicy,
    year_anchor: Option<i32>,
}

impl DatePicker {
    /// Creates a closed picker.
    ///
    /// If the props carry a valid in-range `initial_value`, it becomes the
    /// selected date and the text buffer shows it. Otherwise nothing is
    /// selected and an invalid seed is logged and ignored. The viewed month
    /// starts at the selected date, or at `today`, clamped into the bounds.
    #[instrument(skip(props), fields(field = %props.field_id))]
    pub fn new(props: DateFieldProps, today: NaiveDate) -> Self {
        let selected = props.initial_value.as_deref().and_then(|value| {
            match seed_date(value, &props.bounds) {
                Ok(date) => Some(date),
                Err(e) => {
                    warn!(value, error = %e, "ignoring invalid initial value");
                    None
                }
            }
        });

        let view = props
            .bounds
            .clamp_month(ViewedMonth::of(selected.unwrap_or(today)));
        let buffer = selected
            .map(|date| props.format.to_display(date))
            .unwrap_or_default();

        Self {
            props,
            state: PickerState::Closed,
            view,
            selected,
            buffer,
            dismissal: DismissalPolicy::default(),
            year_anchor: None,
        }
    }

    /// The host-supplied configuration.
    #[must_use]
    pub fn props(&self) -> &DateFieldProps {
        &self.props
    }

    /// The accepted range.
    #[must_use]
    pub fn bounds(&self) -> &DateBounds {
        &self.props.bounds
    }

    /// The current open/closed state.
    #[must_use]
    pub fn state(&self) -> PickerState {
        self.state
    }

    /// Returns whether the popup is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The month the grid shows.
    #[must_use]
    pub fn viewed_month(&self) -> ViewedMonth {
        self.view
    }

    /// The last committed date.
    #[must_use]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// The raw text shown in the field.
    #[must_use]
    pub fn input_buffer(&self) -> &str {
        &self.buffer
    }

    /// The year the year picker centers on, recorded when it opened.
    #[must_use]
    pub fn year_scroll_anchor(&self) -> Option<i32> {
        self.year_anchor
    }

    /// Updates the host's validation flag, which only affects styling.
    pub fn set_validation_error(&mut self, has_error: bool) {
        self.props.has_validation_error = has_error;
    }

    /// The day grid for the viewed month.
    #[must_use]
    pub fn day_cells(&self) -> Vec<DayCell> {
        grid::generate(self.view, &self.props.bounds, self.props.week_start)
    }

    /// The month quick-pick entries for the viewed year.
    #[must_use]
    pub fn month_entries(&self) -> Vec<MonthEntry> {
        quick_pick::month_entries(self.view, &self.props.bounds)
    }

    /// The year quick-pick entries.
    #[must_use]
    pub fn year_entries(&self) -> Vec<YearEntry> {
        quick_pick::year_entries(self.view, &self.props.bounds)
    }

    /// Applies one interaction.
    ///
    /// Returns a [`Commit`] when the interaction committed a date. Invalid
    /// or ineligible input never returns an error; it is simply not
    /// committed.
    pub fn update(&mut self, msg: PickerMessage) -> Option<Commit> {
        match msg {
            PickerMessage::Activate => {
                self.activate();
                None
            }
            PickerMessage::ToggleCalendar => {
                self.toggle_calendar();
                None
            }
            PickerMessage::ToggleMonthPicker => {
                self.toggle_panel(Panel::MonthPicker);
                None
            }
            PickerMessage::ToggleYearPicker => {
                self.toggle_panel(Panel::YearPicker);
                None
            }
            PickerMessage::NavigateMonth { delta } => {
                self.navigate_month(delta);
                None
            }
            PickerMessage::SelectDay { day } => self.select_day(day),
            PickerMessage::SelectMonth { month } => {
                self.select_month(month);
                None
            }
            PickerMessage::SelectYear { year } => {
                self.select_year(year);
                None
            }
            PickerMessage::EditText { text } => self.edit_text(text),
            PickerMessage::InputChar { ch } => {
                let mut text = self.buffer.clone();
                text.push(ch);
                self.edit_text(text)
            }
            PickerMessage::Backspace => {
                let mut text = self.buffer.clone();
                text.pop();
                self.edit_text(text)
            }
            PickerMessage::Interaction { origin } => {
                self.interact(origin);
                None
            }
        }
    }

    /// Opens the day grid if the picker is closed.
    pub fn activate(&mut self) {
        if !self.is_open() {
            self.open(Panel::DayGrid);
        }
    }

    /// Opens the day grid when closed, closes the picker when open.
    pub fn toggle_calendar(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open(Panel::DayGrid);
        }
    }

    /// Moves the viewed month, clamped to the bounds. Ignored while closed.
    pub fn navigate_month(&mut self, delta: i32) {
        if self.is_open() {
            self.view = add_months(self.view, delta, &self.props.bounds);
        }
    }

    /// Commits `day` of the viewed month if its cell is enabled.
    ///
    /// Blank, disabled, or nonexistent days are no-ops, as is any selection
    /// while the picker is closed.
    pub fn select_day(&mut self, day: u32) -> Option<Commit> {
        if !self.is_open() {
            return None;
        }
        let date = self
            .day_cells()
            .into_iter()
            .find(|cell| cell.day() == Some(day))
            .filter(DayCell::is_selectable)
            .and_then(|cell| cell.date())?;

        let commit = self.commit(date);
        self.buffer = self.props.format.to_display(date);
        self.close();
        Some(commit)
    }

    /// Shows `month` of the viewed year and returns to the day grid.
    ///
    /// Only applies while the month picker is visible; disabled entries are
    /// ignored.
    pub fn select_month(&mut self, month: u32) {
        if self.state != PickerState::Open(Panel::MonthPicker) {
            return;
        }
        let Some(target) = self.view.with_month(month) else {
            return;
        };
        if !self.props.bounds.contains_month(target) {
            return;
        }
        self.view = target;
        self.show(Panel::DayGrid);
    }

    /// Shows the viewed month of `year` and returns to the day grid.
    ///
    /// Only applies while the year picker is visible. Years outside the
    /// bounds are ignored; the month is clamped when the chosen year only
    /// partly lies in range.
    pub fn select_year(&mut self, year: i32) {
        if self.state != PickerState::Open(Panel::YearPicker) {
            return;
        }
        if !self.props.bounds.years().contains(&year) {
            return;
        }
        self.view = self.props.bounds.clamp_month(self.view.with_year(year));
        self.show(Panel::DayGrid);
    }

    /// Replaces the text buffer and commits it if it is a complete, valid,
    /// in-range date.
    ///
    /// A successful typed commit moves the viewed month to the new date but
    /// leaves the open state and the typed text as they are.
    pub fn edit_text(&mut self, text: String) -> Option<Commit> {
        self.buffer = text;
        if self.buffer.chars().count() != self.props.format.expected_len() {
            return None;
        }

        match self
            .props
            .format
            .parse(&self.buffer)
            .map_err(PickerError::from)
            .and_then(|date| self.props.bounds.check(date))
        {
            Ok(date) => {
                self.view = ViewedMonth::of(date);
                Some(self.commit(date))
            }
            Err(e) => {
                debug!(field = %self.props.field_id, error = %e, "typed date rejected");
                None
            }
        }
    }

    /// Closes the picker when `origin` is outside and the picker is open.
    pub fn interact(&mut self, origin: InteractionOrigin) {
        if self.dismissal.should_dismiss(origin) {
            debug!(field = %self.props.field_id, "dismissed by outside interaction");
            self.close();
        }
    }

    fn toggle_panel(&mut self, target: Panel) {
        if let PickerState::Open(panel) = self.state {
            self.show(panel.toggle(target));
        }
    }

    fn open(&mut self, panel: Panel) {
        self.dismissal.arm();
        self.show(panel);
    }

    fn show(&mut self, panel: Panel) {
        self.state = PickerState::Open(panel);
        self.year_anchor = (panel == Panel::YearPicker).then_some(self.view.year());
    }

    fn close(&mut self) {
        self.state = PickerState::Closed;
        self.dismissal.disarm();
        self.year_anchor = None;
    }

    fn commit(&mut self, date: NaiveDate) -> Commit {
        self.selected = Some(date);
        let commit = Commit {
            field_id: self.props.field_id.clone(),
            value: to_canonical(date),
            date,
        };
        debug!(field = %commit.field_id, value = %commit.value, "date committed");
        commit
    }
}

fn seed_date(value: &str, bounds: &DateBounds) -> Result<NaiveDate> {
    let date = parse_canonical(value)?;
    bounds.check(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FieldOrder;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dob_bounds() -> DateBounds {
        DateBounds::new(ymd(1920, 1, 1), ymd(2003, 12, 31)).unwrap()
    }

    fn picker() -> DatePicker {
        let props = DateFieldProps::new("Date of Birth", "dateOfBirth", dob_bounds()).required(true);
        DatePicker::new(props, ymd(2026, 10, 19))
    }

    fn month(y: i32, m: u32) -> ViewedMonth {
        ViewedMonth::new(y, m).unwrap()
    }

    #[test]
    fn starts_closed_and_empty() {
        let picker = picker();
        assert_eq!(picker.state(), PickerState::Closed);
        assert_eq!(picker.selected_date(), None);
        assert_eq!(picker.input_buffer(), "");
    }

    #[test]
    fn initial_view_clamps_today_into_bounds() {
        assert_eq!(picker().viewed_month(), month(2003, 11));
    }

    #[test]
    fn initial_value_seeds_selection_and_buffer() {
        let props = DateFieldProps::new("DOB", "dob", dob_bounds()).initial_value("1987-04-12");
        let picker = DatePicker::new(props, ymd(2026, 10, 19));
        assert_eq!(picker.selected_date(), Some(ymd(1987, 4, 12)));
        assert_eq!(picker.input_buffer(), "12-04-1987");
        assert_eq!(picker.viewed_month(), month(1987, 3));
    }

    #[test]
    fn invalid_initial_value_is_ignored() {
        for seed in ["2010-01-01", "12-04-1987", "1987-02-30"] {
            let props = DateFieldProps::new("DOB", "dob", dob_bounds()).initial_value(seed);
            let picker = DatePicker::new(props, ymd(2026, 10, 19));
            assert_eq!(picker.selected_date(), None, "seed {seed}");
            assert_eq!(picker.input_buffer(), "");
        }
    }

    #[test]
    fn activate_opens_day_grid() {
        let mut picker = picker();
        picker.update(PickerMessage::Activate);
        assert_eq!(picker.state(), PickerState::Open(Panel::DayGrid));

        // Activating again keeps the current panel.
        picker.update(PickerMessage::ToggleMonthPicker);
        picker.update(PickerMessage::Activate);
        assert_eq!(picker.state(), PickerState::Open(Panel::MonthPicker));
    }

    #[test]
    fn calendar_button_toggles() {
        let mut picker = picker();
        picker.update(PickerMessage::ToggleCalendar);
        assert!(picker.is_open());
        picker.update(PickerMessage::ToggleCalendar);
        assert!(!picker.is_open());
    }

    #[test]
    fn month_and_year_pickers_are_exclusive() {
        let mut picker = picker();
        picker.update(PickerMessage::Activate);

        picker.update(PickerMessage::ToggleMonthPicker);
        assert_eq!(picker.state(), PickerState::Open(Panel::MonthPicker));

        picker.update(PickerMessage::ToggleYearPicker);
        assert_eq!(picker.state(), PickerState::Open(Panel::YearPicker));

        picker.update(PickerMessage::ToggleYearPicker);
        assert_eq!(picker.state(), PickerState::Open(Panel::DayGrid));
    }

    #[test]
    fn picker_labels_do_nothing_while_closed() {
        let mut picker = picker();
        picker.update(PickerMessage::ToggleMonthPicker);
        picker.update(PickerMessage::ToggleYearPicker);
        picker.update(PickerMessage::NavigateMonth { delta: -1 });
        assert_eq!(picker.state(), PickerState::Closed);
        assert_eq!(picker.viewed_month(), month(2003, 11));
    }

    #[test]
    fn navigation_clamps_at_max_month() {
        let mut picker = picker();
        picker.update(PickerMessage::Activate);
        picker.update(PickerMessage::NavigateMonth { delta: 1 });
        assert_eq!(picker.viewed_month(), month(2003, 11));
        picker.update(PickerMessage::NavigateMonth { delta: -1 });
        assert_eq!(picker.viewed_month(), month(2003, 10));
        assert_eq!(picker.state(), PickerState::Open(Panel::DayGrid));
    }

    #[test]
    fn selecting_a_day_commits_and_closes() {
        let mut picker = picker();
        picker.update(PickerMessage::Activate);
        picker.update(PickerMessage::NavigateMonth { delta: -2 });

        let commit = picker.update(PickerMessage::SelectDay { day: 15 }).unwrap();
        assert_eq!(
            commit,
            Commit {
                field_id: "dateOfBirth".to_string(),
                value: "2003-10-15".to_string(),
                date: ymd(2003, 10, 15),
            }
        );
        assert_eq!(picker.selected_date(), Some(ymd(2003, 10, 15)));
        assert_eq!(picker.input_buffer(), "15-10-2003");
        assert_eq!(picker.state(), PickerState::Closed);
    }

    #[test]
    fn selecting_a_disabled_day_is_a_no_op() {
        let bounds = DateBounds::new(ymd(1920, 1, 1), ymd(2003, 12, 15)).unwrap();
        let props = DateFieldProps::new("DOB", "dob", bounds);
        let mut picker = DatePicker::new(props, ymd(2026, 10, 19));
        picker.update(PickerMessage::Activate);

        assert_eq!(picker.update(PickerMessage::SelectDay { day: 20 }), None);
        assert_eq!(picker.update(PickerMessage::SelectDay { day: 32 }), None);
        assert_eq!(picker.update(PickerMessage::SelectDay { day: 0 }), None);
        assert_eq!(picker.selected_date(), None);
        assert_eq!(picker.input_buffer(), "");
        assert!(picker.is_open());
    }

    #[test]
    fn selecting_a_day_while_closed_is_a_no_op() {
        let mut picker = picker();
        assert_eq!(picker.update(PickerMessage::SelectDay { day: 1 }), None);
    }

    #[test]
    fn choosing_a_month_returns_to_grid() {
        let mut picker = picker();
        picker.update(PickerMessage::Activate);
        picker.update(PickerMessage::ToggleMonthPicker);
        picker.update(PickerMessage::SelectMonth { month: 1 });

        assert_eq!(picker.viewed_month(), month(2003, 1));
        assert_eq!(picker.state(), PickerState::Open(Panel::DayGrid));
    }

    #[test]
    fn disabled_month_entry_is_a_no_op() {
        let bounds = DateBounds::new(ymd(1920, 1, 1), ymd(2003, 6, 30)).unwrap();
        let mut picker = DatePicker::new(DateFieldProps::new("DOB", "dob", bounds), ymd(2026, 1, 1));
        picker.update(PickerMessage::Activate);
        picker.update(PickerMessage::ToggleMonthPicker);
        picker.update(PickerMessage::SelectMonth { month: 9 });

        assert_eq!(picker.viewed_month(), month(2003, 5));
        assert_eq!(picker.state(), PickerState::Open(Panel::MonthPicker));
    }

    #[test]
    fn month_selection_requires_month_picker() {
        let mut picker = picker();
        picker.update(PickerMessage::Activate);
        picker.update(PickerMessage::SelectMonth { month: 2 });
        assert_eq!(picker.viewed_month(), month(2003, 11));
    }

    #[test]
    fn choosing_a_year_keeps_month() {
        let mut picker = picker();
        picker.update(PickerMessage::Activate);
        picker.update(PickerMessage::NavigateMonth { delta: -7 });
        picker.update(PickerMessage::ToggleYearPicker);
        assert_eq!(picker.year_scroll_anchor(), Some(2003));

        picker.update(PickerMessage::SelectYear { year: 1995 });
        assert_eq!(picker.viewed_month(), month(1995, 4));
        assert_eq!(picker.state(), PickerState::Open(Panel::DayGrid));
        assert_eq!(picker.year_scroll_anchor(), None);
    }

    #[test]
    fn choosing_a_boundary_year_clamps_month() {
        let bounds = DateBounds::new(ymd(1920, 5, 1), ymd(2003, 12, 31)).unwrap();
        let props = DateFieldProps::new("DOB", "dob", bounds).initial_value("1950-02-10");
        let mut picker = DatePicker::new(props, ymd(2026, 1, 1));
        picker.update(PickerMessage::Activate);
        picker.update(PickerMessage::ToggleYearPicker);
        picker.update(PickerMessage::SelectYear { year: 1920 });

        assert_eq!(picker.viewed_month(), month(1920, 4));
    }

    #[test]
    fn out_of_range_year_is_a_no_op() {
        let mut picker = picker();
        picker.update(PickerMessage::Activate);
        picker.update(PickerMessage::ToggleYearPicker);
        picker.update(PickerMessage::SelectYear { year: 2010 });
        assert_eq!(picker.viewed_month(), month(2003, 11));
        assert_eq!(picker.state(), PickerState::Open(Panel::YearPicker));
    }

    #[test]
    fn outside_interaction_closes_without_changing_value() {
        let props = DateFieldProps::new("DOB", "dob", dob_bounds()).initial_value("1990-01-01");
        let mut picker = DatePicker::new(props, ymd(2026, 1, 1));
        picker.update(PickerMessage::Activate);
        picker.update(PickerMessage::ToggleYearPicker);

        picker.update(PickerMessage::Interaction {
            origin: InteractionOrigin::Inside,
        });
        assert!(picker.is_open());

        picker.update(PickerMessage::Interaction {
            origin: InteractionOrigin::Outside,
        });
        assert_eq!(picker.state(), PickerState::Closed);
        assert_eq!(picker.selected_date(), Some(ymd(1990, 1, 1)));
        assert_eq!(picker.input_buffer(), "01-01-1990");
        assert_eq!(picker.year_scroll_anchor(), None);
    }

    #[test]
    fn typed_valid_date_commits_without_closing_or_reformatting() {
        let mut picker = picker();
        picker.update(PickerMessage::Activate);

        let mut commits = Vec::new();
        for ch in "29-02-2000".chars() {
            commits.extend(picker.update(PickerMessage::InputChar { ch }));
        }

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].value, "2000-02-29");
        assert_eq!(picker.input_buffer(), "29-02-2000");
        assert_eq!(picker.viewed_month(), month(2000, 1));
        assert!(picker.is_open());
    }

    #[test]
    fn typed_invalid_date_keeps_buffer_and_selection() {
        let props = DateFieldProps::new("DOB", "dob", dob_bounds()).initial_value("1990-01-01");
        let mut picker = DatePicker::new(props, ymd(2026, 1, 1));

        let commit = picker.update(PickerMessage::EditText {
            text: "29-02-2003".to_string(),
        });
        assert_eq!(commit, None);
        assert_eq!(picker.input_buffer(), "29-02-2003");
        assert_eq!(picker.selected_date(), Some(ymd(1990, 1, 1)));
    }

    #[test]
    fn typed_out_of_bounds_date_is_not_committed() {
        let mut picker = picker();
        let commit = picker.update(PickerMessage::EditText {
            text: "01-01-2010".to_string(),
        });
        assert_eq!(commit, None);
        assert_eq!(picker.input_buffer(), "01-01-2010");
        assert_eq!(picker.selected_date(), None);
    }

    #[test]
    fn partial_text_never_commits() {
        let mut picker = picker();
        assert_eq!(
            picker.update(PickerMessage::EditText {
                text: "29-02-200".to_string()
            }),
            None
        );
        assert_eq!(
            picker.update(PickerMessage::EditText {
                text: "29-02-20001".to_string()
            }),
            None
        );
    }

    #[test]
    fn backspace_then_retype_commits_again() {
        let mut picker = picker();
        picker.update(PickerMessage::EditText {
            text: "15-06-1980".to_string(),
        });
        assert_eq!(picker.update(PickerMessage::Backspace), None);
        assert_eq!(picker.input_buffer(), "15-06-198");

        let commit = picker.update(PickerMessage::InputChar { ch: '1' }).unwrap();
        assert_eq!(commit.value, "1981-06-15");
    }

    #[test]
    fn custom_format_drives_typing_and_display() {
        let props = DateFieldProps::new("DOB", "dob", dob_bounds())
            .format(DisplayFormat::new(FieldOrder::MonthDayYear, '/'));
        let mut picker = DatePicker::new(props, ymd(2026, 1, 1));

        let commit = picker
            .update(PickerMessage::EditText {
                text: "12/31/2003".to_string(),
            })
            .unwrap();
        assert_eq!(commit.value, "2003-12-31");

        picker.update(PickerMessage::Activate);
        picker.update(PickerMessage::SelectDay { day: 24 });
        assert_eq!(picker.input_buffer(), "12/24/2003");
    }

    #[test]
    fn validation_flag_is_styling_only() {
        let mut picker = picker();
        picker.set_validation_error(true);
        assert!(picker.props().has_validation_error);
        assert_eq!(picker.state(), PickerState::Closed);
    }
}
