//! Form field rendering.
//!
//! Each field takes two rows: the label and value, then either the
//! validation error or the field's help text.

use creditsearch_picker::DatePicker;
use creditsearch_protocol::{FieldId, FieldKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::layout::{LABEL_WIDTH, field_areas, value_area};
use crate::state::FormState;

/// Symbol of the button that toggles the calendar.
pub const CALENDAR_BUTTON: &str = "[▦]";

/// Returns whether the picker holds a complete typed date it did not
/// commit (the date does not exist or is out of range).
///
/// Shorter text is still being typed and is not flagged.
#[must_use]
pub fn typed_date_rejected(picker: &DatePicker) -> bool {
    let buffer = picker.input_buffer();
    let format = picker.props().format;
    let committed = picker.selected_date().map(|date| format.to_display(date));
    buffer.chars().count() == format.expected_len() && committed.as_deref() != Some(buffer)
}

/// Renders every field into the form `area`.
pub fn render_form(state: &FormState, picker: &DatePicker, area: Rect, buf: &mut Buffer) {
    for (field, rect) in field_areas(area) {
        render_field(state, picker, field, rect, buf);
    }
}

fn render_field(
    state: &FormState,
    picker: &DatePicker,
    field: FieldId,
    rect: Rect,
    buf: &mut Buffer,
) {
    let focused = state.focus == field;
    let error = state.visible_error(field);

    let label_style = match (focused, error.is_some()) {
        (true, _) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::Red),
        (false, false) => Style::default(),
    };
    let marker = if field.is_required() { "*" } else { "" };
    buf.set_stringn(
        rect.x,
        rect.y,
        format!("{}{marker}", field.label()),
        usize::from(LABEL_WIDTH.saturating_sub(1)),
        label_style,
    );

    let value = value_area(rect);
    let (text, style) = field_value(state, picker, field, focused);
    buf.set_stringn(value.x, value.y, text, usize::from(value.width), style);

    let (hint, hint_style) = match error {
        Some(message) => (message.to_string(), Style::default().fg(Color::Red)),
        None => (
            field_hint(state, field).unwrap_or_default(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    if rect.height > 1 {
        buf.set_stringn(
            value.x,
            value.y + 1,
            hint,
            usize::from(value.width),
            hint_style,
        );
    }
}

fn field_hint(state: &FormState, field: FieldId) -> Option<String> {
    if field == FieldId::AddressLine && state.pending_lookup.is_some() {
        return Some("Looking up addresses…".to_string());
    }
    field.help_text().map(str::to_string)
}

fn field_value(
    state: &FormState,
    picker: &DatePicker,
    field: FieldId,
    focused: bool,
) -> (String, Style) {
    let placeholder_style = Style::default().fg(Color::DarkGray);
    let value_style = if focused {
        Style::default().add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
    };

    match field.kind() {
        FieldKind::Select => {
            let label = state
                .values
                .title
                .map_or("Select title", |title| title.as_str());
            (format!("‹ {label} ›"), value_style)
        }
        FieldKind::Checkbox => {
            let mark = if state.values.confirmation { "x" } else { " " };
            (format!("[{mark}]"), value_style)
        }
        FieldKind::Date => {
            let buffer = picker.input_buffer();
            if buffer.is_empty() {
                let placeholder = picker.props().format.placeholder();
                (format!("{placeholder} {CALENDAR_BUTTON}"), placeholder_style)
            } else {
                (format!("{buffer} {CALENDAR_BUTTON}"), value_style)
            }
        }
        FieldKind::Text if field == FieldId::AddressLine && !state.address_options.is_empty() => {
            let label = state
                .address_options
                .get(state.address_choice)
                .map_or("", String::as_str);
            (format!("‹ {label} ›"), value_style)
        }
        FieldKind::Text => {
            let text = state.values.text(field).unwrap_or_default();
            match (text.is_empty(), field.placeholder()) {
                (true, Some(placeholder)) if !focused => {
                    (placeholder.to_string(), placeholder_style)
                }
                _ if focused => (format!("{text}▏"), value_style),
                _ => (text.to_string(), value_style),
            }
        }
    }
}
