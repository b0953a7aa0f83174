//! Help overlay widget.
//!
//! Lists the key bindings of the form and of the calendar popup when the
//! user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 46;

/// Width of the key column, indentation included.
const KEY_COLUMN: usize = 15;

/// Key bindings grouped by section.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Form",
        &[
            ("Tab / ↓", "Next field"),
            ("Shift+Tab / ↑", "Previous field"),
            ("← →", "Change option"),
            ("Space", "Tick checkbox"),
            ("Enter", "Open calendar / find address"),
            ("Ctrl+S", "Submit"),
        ],
    ),
    (
        "Calendar",
        &[
            ("← → ↑ ↓", "Move cursor"),
            ("PgUp / PgDn", "Previous / next month"),
            ("m", "Choose month"),
            ("y", "Choose year"),
            ("Enter", "Pick highlighted entry"),
            ("Esc", "Close calendar"),
            ("0-9", "Type the date"),
        ],
    ),
    ("General", &[("Ctrl+C", "Quit"), ("?", "Toggle help")]),
];

/// Renders a centered help overlay displaying all keybindings.
///
/// The area behind the overlay is cleared first.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use creditsearch_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let lines = build_help_lines();
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup_area = overlay_area(HELP_WIDTH, height, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(lines)
        .block(help_block)
        .render(popup_area, buf);
}

fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
        lines.extend(bindings.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {key:<width$}", width = KEY_COLUMN - 2),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(*action, Style::default().fg(Color::White)),
            ])
        }));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
    lines
}

/// A `width` × `height` rectangle centered in `area`, shrunk to fit.
fn overlay_area(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
