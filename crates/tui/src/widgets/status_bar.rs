//! Status bar widget.
//!
//! The bottom row shows the latest status message on the left and the
//! key hints for the current mode on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use crate::state::Status;

const FORM_HINTS: &str = "Tab next · Enter open · Ctrl+S submit · ? help";
const PICKER_HINTS: &str = "arrows move · PgUp/PgDn month · m/y pick · Esc close";

/// Renders the status bar into `area`.
///
/// Hints are dropped when the status message leaves no room for them.
///
/// # Examples
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect};
/// use creditsearch_tui::Status;
/// use creditsearch_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
/// render_status_bar(Some(&Status::Info("Found 3 addresses".into())), false, area, &mut buf);
/// ```
pub fn render_status_bar(status: Option<&Status>, picker_open: bool, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    let mut used = 0;
    if let Some(status) = status {
        let color = match status {
            Status::Info(_) => Color::Cyan,
            Status::Success(_) => Color::Green,
            Status::Error(_) => Color::Red,
        };
        let (x, _) = buf.set_stringn(
            area.x + 1,
            area.y,
            status.text(),
            usize::from(area.width.saturating_sub(1)),
            Style::default().fg(color),
        );
        used = x.saturating_sub(area.x);
    }

    let hints = if picker_open { PICKER_HINTS } else { FORM_HINTS };
    let hints_width = hints.chars().count() as u16;
    if used + hints_width + 2 <= area.width {
        buf.set_string(
            area.right() - hints_width - 1,
            area.y,
            hints,
            Style::default().fg(Color::DarkGray),
        );
    }
}
