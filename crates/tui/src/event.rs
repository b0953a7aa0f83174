//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Keys map differently while the date picker
//! popup is open.

use std::time::Duration;

use creditsearch_picker::PickerMessage;
use creditsearch_protocol::Message;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// `picker_open` selects the popup key bindings.
#[must_use]
pub fn event_to_message(event: &Event, picker_open: bool) -> Option<Message> {
    match event {
        Event::Key(key) if picker_open => key_to_picker_message(*key),
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click press events are handled, producing a `ClickAt` message
/// with the click coordinates.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn global_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            KeyCode::Char('s') => Some(Message::Submit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Tab => Some(Message::FocusNext),
        KeyCode::BackTab => Some(Message::FocusPrev),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}

/// Converts a terminal key event to a form message.
///
/// Returns `None` for unbound keys and key releases.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Ctrl+S` | Submit |
/// | `Tab` / `Down` | Next field |
/// | `Shift+Tab` / `Up` | Previous field |
/// | `Left` / `Right` | Cycle select options |
/// | `Enter` | Open date picker / look up postal code |
/// | `Backspace` | Delete character |
/// | `?` | Toggle help |
/// | Any char | Type (`Space` toggles checkboxes) |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if let Some(msg) = global_message(key) {
        return Some(msg);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Down => Some(Message::FocusNext),
        KeyCode::Up => Some(Message::FocusPrev),
        KeyCode::Left => Some(Message::CycleOption { delta: -1 }),
        KeyCode::Right => Some(Message::CycleOption { delta: 1 }),
        KeyCode::Enter => Some(Message::Activate),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(ch) => Some(Message::Input { ch }),
        _ => None,
    }
}

/// Converts a key event to a message while the date picker is open.
///
/// # Key Bindings (Picker Open)
///
/// | Key | Action |
/// |-----|--------|
/// | Arrows | Move the cursor |
/// | `PageUp` / `PageDown` | Previous / next month |
/// | `m` | Toggle the month picker |
/// | `y` | Toggle the year picker |
/// | `Enter` | Choose the entry under the cursor |
/// | `Esc` | Close the picker |
/// | `Tab` / `Shift+Tab` | Leave the field (closes the picker) |
/// | `Backspace` / other chars | Edit the typed date |
#[must_use]
pub fn key_to_picker_message(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if let Some(msg) = global_message(key) {
        return Some(msg);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Message::PickerDismiss),
        KeyCode::Left => Some(Message::PickerCursor { dx: -1, dy: 0 }),
        KeyCode::Right => Some(Message::PickerCursor { dx: 1, dy: 0 }),
        KeyCode::Up => Some(Message::PickerCursor { dx: 0, dy: -1 }),
        KeyCode::Down => Some(Message::PickerCursor { dx: 0, dy: 1 }),
        KeyCode::PageUp => Some(Message::Picker(PickerMessage::NavigateMonth { delta: -1 })),
        KeyCode::PageDown => Some(Message::Picker(PickerMessage::NavigateMonth { delta: 1 })),
        KeyCode::Char('m') => Some(Message::Picker(PickerMessage::ToggleMonthPicker)),
        KeyCode::Char('y') => Some(Message::Picker(PickerMessage::ToggleYearPicker)),
        KeyCode::Enter => Some(Message::PickerConfirm),
        KeyCode::Backspace => Some(Message::Picker(PickerMessage::Backspace)),
        KeyCode::Char(ch) => Some(Message::Picker(PickerMessage::InputChar { ch })),
        _ => None,
    }
}
