//! Rendering helpers shared by the TUI tests.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::App;

/// Converts a [`Buffer`] to text, one line per row.
///
/// Trailing spaces are trimmed so snapshots stay readable.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut result = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Draws `app` on a `width` × `height` test terminal and returns the text.
///
/// Drawing also records the area the app uses to hit-test clicks.
pub(crate) fn draw_app(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.view(frame)).unwrap();
    buffer_to_string(terminal.backend().buffer())
}
