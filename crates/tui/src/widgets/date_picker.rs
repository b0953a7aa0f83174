//! Date picker popup widget.
//!
//! Renders the open picker's header, the visible panel and the bound
//! hints, and maps clicks inside the popup back to picker interactions.
//!
//! # Layout
//!
//! ```text
//! ╭ Date of Birth ──────╮
//! │< December 2003     >│
//! │Su Mo Tu We Th Fr Sa │
//! │    1  2  3  4  5  6 │
//! │ 7  8  9 10 11 12 13 │
//! │ ...                 │
//! │Min: 01-01-1920      │
//! │Max: 31-12-2003      │
//! ╰─────────────────────╯
//! ```

use std::ops::Range;

use creditsearch_picker::{DatePicker, DayCell, Panel, PickerMessage, ViewedMonth};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::picker_cursor::{PickerCursor, QUICK_PICK_COLUMNS};

const PREV_COL: u16 = 0;
const LABEL_COL: u16 = 2;
const NEXT_COL: u16 = 20;
const HEADER_ROW: u16 = 0;
const WEEKDAY_ROW: u16 = 1;
const BODY_ROW: u16 = 2;
const BODY_ROWS: u16 = 6;
const MIN_ROW: u16 = 8;
const MAX_ROW: u16 = 9;
const DAY_CELL_WIDTH: u16 = 3;
const ENTRY_WIDTH: u16 = 5;

/// A region of the popup under a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerHit {
    /// The previous-month arrow.
    PrevMonth,
    /// The next-month arrow.
    NextMonth,
    /// The month name, which toggles the month picker.
    MonthLabel,
    /// The year, which toggles the year picker.
    YearLabel,
    /// A day cell (blank cells count as the popup body).
    Day(u32),
    /// A month picker entry.
    Month(u32),
    /// A year picker entry.
    Year(i32),
    /// Anywhere else inside the popup.
    Body,
}

impl PickerHit {
    /// The picker interaction this hit triggers.
    ///
    /// Clicks on the body return `None`; they keep the popup open without
    /// changing anything.
    #[must_use]
    pub fn to_message(self) -> Option<PickerMessage> {
        match self {
            Self::PrevMonth => Some(PickerMessage::NavigateMonth { delta: -1 }),
            Self::NextMonth => Some(PickerMessage::NavigateMonth { delta: 1 }),
            Self::MonthLabel => Some(PickerMessage::ToggleMonthPicker),
            Self::YearLabel => Some(PickerMessage::ToggleYearPicker),
            Self::Day(day) => Some(PickerMessage::SelectDay { day }),
            Self::Month(month) => Some(PickerMessage::SelectMonth { month }),
            Self::Year(year) => Some(PickerMessage::SelectYear { year }),
            Self::Body => None,
        }
    }
}

/// Column ranges of the month name and the year in the header row.
fn label_spans(view: ViewedMonth) -> (Range<u16>, Range<u16>) {
    let month_end = LABEL_COL + view.name().len() as u16;
    let year_start = month_end + 1;
    let year_end = year_start + view.year().to_string().len() as u16;
    (LABEL_COL..month_end, year_start..year_end)
}

/// Indices of the year entries visible in the year picker.
///
/// The window keeps `focus` on the third row where possible.
fn year_window(len: usize, focus_index: usize) -> Range<usize> {
    let columns = QUICK_PICK_COLUMNS as usize;
    let rows_total = len.div_ceil(columns);
    let max_start_row = rows_total.saturating_sub(BODY_ROWS as usize);
    let start_row = (focus_index / columns).saturating_sub(2).min(max_start_row);
    let start = start_row * columns;
    start..len.min(start + columns * BODY_ROWS as usize)
}

/// The year the year picker centers on.
fn focus_year(picker: &DatePicker, cursor: Option<&PickerCursor>) -> i32 {
    cursor
        .map(PickerCursor::year)
        .or(picker.year_scroll_anchor())
        .unwrap_or(picker.viewed_month().year())
}

fn visible_years(picker: &DatePicker, cursor: Option<&PickerCursor>) -> Vec<i32> {
    let years: Vec<i32> = picker.year_entries().iter().map(|e| e.year).collect();
    let focus = focus_year(picker, cursor);
    let focus_index = years.iter().position(|&y| y == focus).unwrap_or(0);
    years[year_window(years.len(), focus_index)].to_vec()
}

/// Renders the open date picker popup into `area`.
///
/// Nothing is drawn while the picker is closed. `cursor` highlights the
/// keyboard position.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_picker::{DateBounds, DateFieldProps, DatePicker, PickerMessage};
/// use ratatui::{buffer::Buffer, layout::Rect};
/// use creditsearch_tui::widgets::render_date_picker;
///
/// let bounds = DateBounds::new(
///     NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2003, 12, 31).unwrap(),
/// ).unwrap();
/// let props = DateFieldProps::new("Date of Birth", "dateOfBirth", bounds);
/// let mut picker = DatePicker::new(props, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// picker.update(PickerMessage::Activate);
///
/// let area = Rect::new(0, 0, 23, 12);
/// let mut buf = Buffer::empty(area);
/// render_date_picker(&picker, None, area, &mut buf);
/// ```
pub fn render_date_picker(
    picker: &DatePicker,
    cursor: Option<&PickerCursor>,
    area: Rect,
    buf: &mut Buffer,
) {
    let Some(panel) = picker.state().panel() else {
        return;
    };

    Clear.render(area, buf);
    let border_color = if picker.props().has_validation_error {
        Color::Red
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", picker.props().label),
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    block.render(area, buf);

    render_header(picker, panel, inner, buf);
    match panel {
        Panel::DayGrid => render_day_grid(picker, cursor, inner, buf),
        Panel::MonthPicker => render_month_picker(picker, cursor, inner, buf),
        Panel::YearPicker => render_year_picker(picker, cursor, inner, buf),
    }
    render_bounds(picker, inner, buf);
}

fn put(buf: &mut Buffer, inner: Rect, col: u16, row: u16, text: &str, style: Style) {
    if row < inner.height && col < inner.width {
        let width = (inner.width - col) as usize;
        buf.set_stringn(inner.x + col, inner.y + row, text, width, style);
    }
}

fn render_header(picker: &DatePicker, panel: Panel, inner: Rect, buf: &mut Buffer) {
    let view = picker.viewed_month();
    let bounds = picker.bounds();
    let arrow = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let label = |active: bool| {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if active {
            style.fg(Color::Black).bg(Color::Cyan)
        } else {
            style
        }
    };

    let (month_span, year_span) = label_spans(view);
    put(buf, inner, PREV_COL, HEADER_ROW, "<", arrow(view > bounds.min_month()));
    put(
        buf,
        inner,
        month_span.start,
        HEADER_ROW,
        view.name(),
        label(panel == Panel::MonthPicker),
    );
    put(
        buf,
        inner,
        year_span.start,
        HEADER_ROW,
        &view.year().to_string(),
        label(panel == Panel::YearPicker),
    );
    put(buf, inner, NEXT_COL, HEADER_ROW, ">", arrow(view < bounds.max_month()));
}

fn render_day_grid(
    picker: &DatePicker,
    cursor: Option<&PickerCursor>,
    inner: Rect,
    buf: &mut Buffer,
) {
    let labels = picker.props().week_start.labels().join(" ");
    put(
        buf,
        inner,
        0,
        WEEKDAY_ROW,
        &labels,
        Style::default().fg(Color::Yellow),
    );

    let selected = picker.selected_date();
    for (index, cell) in (0u16..).zip(picker.day_cells()) {
        let DayCell::Day { date, disabled } = cell else {
            continue;
        };
        let mut style = if disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        if selected == Some(date) {
            style = style.fg(Color::Black).bg(Color::Cyan);
        }
        if cursor.is_some_and(|c| c.date() == date) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        put(
            buf,
            inner,
            (index % 7) * DAY_CELL_WIDTH,
            BODY_ROW + index / 7,
            &format!("{:>2}", cell.day().unwrap_or_default()),
            style,
        );
    }
}

fn entry_style(current: bool, disabled: bool, highlighted: bool) -> Style {
    let mut style = Style::default();
    if disabled {
        style = style.fg(Color::DarkGray);
    } else if current {
        style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    if highlighted {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn render_month_picker(
    picker: &DatePicker,
    cursor: Option<&PickerCursor>,
    inner: Rect,
    buf: &mut Buffer,
) {
    let columns = QUICK_PICK_COLUMNS as u16;
    for (index, entry) in (0u16..).zip(picker.month_entries()) {
        let highlighted = cursor.is_some_and(|c| c.month() == entry.month);
        put(
            buf,
            inner,
            1 + (index % columns) * ENTRY_WIDTH,
            BODY_ROW + index / columns,
            entry.label,
            entry_style(entry.current, entry.disabled, highlighted),
        );
    }
}

fn render_year_picker(
    picker: &DatePicker,
    cursor: Option<&PickerCursor>,
    inner: Rect,
    buf: &mut Buffer,
) {
    let columns = QUICK_PICK_COLUMNS as u16;
    let current = picker.viewed_month().year();
    for (index, year) in (0u16..).zip(visible_years(picker, cursor)) {
        let highlighted = cursor.is_some_and(|c| c.year() == year);
        put(
            buf,
            inner,
            1 + (index % columns) * ENTRY_WIDTH,
            BODY_ROW + index / columns,
            &year.to_string(),
            entry_style(year == current, false, highlighted),
        );
    }
}

fn render_bounds(picker: &DatePicker, inner: Rect, buf: &mut Buffer) {
    let format = picker.props().format;
    let bounds = picker.bounds();
    let style = Style::default().fg(Color::DarkGray);
    put(
        buf,
        inner,
        0,
        MIN_ROW,
        &format!("Min: {}", format.to_display(bounds.min())),
        style,
    );
    put(
        buf,
        inner,
        0,
        MAX_ROW,
        &format!("Max: {}", format.to_display(bounds.max())),
        style,
    );
}

/// Finds what a click at (`column`, `row`) hits in a popup drawn at `area`.
///
/// Returns `None` when the click is outside the popup.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_picker::{DateBounds, DateFieldProps, DatePicker, PickerMessage};
/// use ratatui::layout::Rect;
/// use creditsearch_tui::widgets::{PickerHit, hit_test};
///
/// let bounds = DateBounds::new(
///     NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2003, 12, 31).unwrap(),
/// ).unwrap();
/// let props = DateFieldProps::new("Date of Birth", "dateOfBirth", bounds);
/// let mut picker = DatePicker::new(props, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// picker.update(PickerMessage::Activate);
///
/// let area = Rect::new(10, 5, 23, 12);
/// assert_eq!(hit_test(&picker, None, area, 11, 6), Some(PickerHit::PrevMonth));
/// assert_eq!(hit_test(&picker, None, area, 0, 0), None);
/// ```
#[must_use]
pub fn hit_test(
    picker: &DatePicker,
    cursor: Option<&PickerCursor>,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<PickerHit> {
    let panel = picker.state().panel()?;
    if !area.contains((column, row).into()) {
        return None;
    }

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if !inner.contains((column, row).into()) {
        return Some(PickerHit::Body);
    }
    let col = column - inner.x;
    let line = row - inner.y;

    if line == HEADER_ROW {
        let (month_span, year_span) = label_spans(picker.viewed_month());
        let hit = match col {
            PREV_COL => PickerHit::PrevMonth,
            NEXT_COL => PickerHit::NextMonth,
            c if month_span.contains(&c) => PickerHit::MonthLabel,
            c if year_span.contains(&c) => PickerHit::YearLabel,
            _ => PickerHit::Body,
        };
        return Some(hit);
    }

    if !(BODY_ROW..BODY_ROW + BODY_ROWS).contains(&line) {
        return Some(PickerHit::Body);
    }
    let body_row = line - BODY_ROW;

    let hit = match panel {
        Panel::DayGrid => {
            let column_index = col / DAY_CELL_WIDTH;
            let index = usize::from(body_row * 7 + column_index);
            (column_index < 7 && col % DAY_CELL_WIDTH < 2)
                .then(|| picker.day_cells().get(index).and_then(DayCell::day))
                .flatten()
                .map(PickerHit::Day)
        }
        Panel::MonthPicker => {
            entry_index(col, 3)
                .map(|c| u32::from(body_row) * QUICK_PICK_COLUMNS as u32 + c)
                .filter(|&month| month < 12)
                .map(PickerHit::Month)
        }
        Panel::YearPicker => entry_index(col, 4).and_then(|c| {
            let index = usize::from(body_row) * QUICK_PICK_COLUMNS as usize + c as usize;
            visible_years(picker, cursor)
                .get(index)
                .copied()
                .map(PickerHit::Year)
        }),
    };
    Some(hit.unwrap_or(PickerHit::Body))
}

/// Column index of a quick-pick entry `width` characters wide.
fn entry_index(col: u16, width: u16) -> Option<u32> {
    let offset = col.checked_sub(1)?;
    let column = offset / ENTRY_WIDTH;
    (column < QUICK_PICK_COLUMNS as u16 && offset % ENTRY_WIDTH < width).then_some(u32::from(column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use creditsearch_picker::{DateBounds, DateFieldProps};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_picker(initial: &str) -> DatePicker {
        let bounds = DateBounds::new(ymd(1920, 1, 1), ymd(2003, 12, 31)).unwrap();
        let props = DateFieldProps::new("Date of Birth", "dateOfBirth", bounds).initial_value(initial);
        let mut picker = DatePicker::new(props, ymd(2024, 6, 1));
        picker.update(PickerMessage::Activate);
        picker
    }

    fn area() -> Rect {
        Rect::new(0, 0, 23, 12)
    }

    #[test]
    fn header_hits() {
        let picker = open_picker("2003-12-10");
        // Inner origin is (1, 1).
        assert_eq!(hit_test(&picker, None, area(), 1, 1), Some(PickerHit::PrevMonth));
        assert_eq!(hit_test(&picker, None, area(), 21, 1), Some(PickerHit::NextMonth));
        assert_eq!(hit_test(&picker, None, area(), 3, 1), Some(PickerHit::MonthLabel));
        assert_eq!(hit_test(&picker, None, area(), 10, 1), Some(PickerHit::MonthLabel));
        assert_eq!(hit_test(&picker, None, area(), 11, 1), Some(PickerHit::Body));
        assert_eq!(hit_test(&picker, None, area(), 12, 1), Some(PickerHit::YearLabel));
        assert_eq!(hit_test(&picker, None, area(), 15, 1), Some(PickerHit::YearLabel));
    }

    #[test]
    fn day_hits() {
        // December 2003 starts on a Monday.
        let picker = open_picker("2003-12-10");
        assert_eq!(hit_test(&picker, None, area(), 1, 3), Some(PickerHit::Body));
        assert_eq!(hit_test(&picker, None, area(), 4, 3), Some(PickerHit::Day(1)));
        assert_eq!(hit_test(&picker, None, area(), 5, 3), Some(PickerHit::Day(1)));
        // Gap between cells.
        assert_eq!(hit_test(&picker, None, area(), 6, 3), Some(PickerHit::Body));
        assert_eq!(hit_test(&picker, None, area(), 10, 7), Some(PickerHit::Day(31)));
        assert_eq!(hit_test(&picker, None, area(), 13, 7), Some(PickerHit::Body));
    }

    #[test]
    fn outside_and_border() {
        let picker = open_picker("2003-12-10");
        assert_eq!(hit_test(&picker, None, area(), 23, 0), None);
        assert_eq!(hit_test(&picker, None, area(), 0, 0), Some(PickerHit::Body));
    }

    #[test]
    fn closed_picker_has_no_hits() {
        let bounds = DateBounds::new(ymd(1920, 1, 1), ymd(2003, 12, 31)).unwrap();
        let picker = DatePicker::new(
            DateFieldProps::new("Date of Birth", "dateOfBirth", bounds),
            ymd(2024, 6, 1),
        );
        assert_eq!(hit_test(&picker, None, area(), 4, 3), None);
    }

    #[test]
    fn month_hits() {
        let mut picker = open_picker("1990-06-15");
        picker.update(PickerMessage::ToggleMonthPicker);
        assert_eq!(hit_test(&picker, None, area(), 2, 3), Some(PickerHit::Month(0)));
        assert_eq!(hit_test(&picker, None, area(), 7, 3), Some(PickerHit::Month(1)));
        assert_eq!(hit_test(&picker, None, area(), 17, 5), Some(PickerHit::Month(11)));
        assert_eq!(hit_test(&picker, None, area(), 2, 6), Some(PickerHit::Body));
    }

    #[test]
    fn year_hits_follow_window() {
        let mut picker = open_picker("1995-06-15");
        picker.update(PickerMessage::ToggleYearPicker);
        // The window ends at the last year: 1980..=2003.
        assert_eq!(hit_test(&picker, None, area(), 2, 3), Some(PickerHit::Year(1980)));
        assert_eq!(hit_test(&picker, None, area(), 17, 8), Some(PickerHit::Year(2003)));
    }

    #[test]
    fn year_window_centers_focus() {
        assert_eq!(year_window(84, 0), 0..24);
        assert_eq!(year_window(84, 40), 32..56);
        assert_eq!(year_window(84, 83), 60..84);
        assert_eq!(year_window(5, 3), 0..5);
    }

    #[test]
    fn hits_map_to_messages() {
        assert_eq!(
            PickerHit::Day(4).to_message(),
            Some(PickerMessage::SelectDay { day: 4 })
        );
        assert_eq!(
            PickerHit::PrevMonth.to_message(),
            Some(PickerMessage::NavigateMonth { delta: -1 })
        );
        assert_eq!(PickerHit::Body.to_message(), None);
    }
}
