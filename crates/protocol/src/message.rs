//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use creditsearch_picker::PickerMessage;
use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the form.
///
/// # Examples
///
/// ```
/// use creditsearch_protocol::Message;
///
/// let msg = Message::FocusNext;
/// assert!(msg.is_focus_change());
/// assert!(!Message::Submit.is_focus_change());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move focus to the next field.
    FocusNext,
    /// Move focus to the previous field.
    FocusPrev,
    /// Type a character into the focused text field.
    Input {
        /// The typed character.
        ch: char,
    },
    /// Delete the last character of the focused text field.
    Backspace,
    /// Step through the focused select's options.
    CycleOption {
        /// Steps to move (negative = backwards).
        delta: i32,
    },
    /// Toggle the focused checkbox.
    ToggleCheckbox,
    /// Enter on the focused field: open the date picker or run the lookup.
    Activate,
    /// Validate every field and submit.
    Submit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },

    // --- Date picker messages ---
    /// Forward an interaction to the date picker.
    Picker(PickerMessage),
    /// Move the cursor inside the open picker panel.
    PickerCursor {
        /// Columns to move.
        dx: i32,
        /// Rows to move.
        dy: i32,
    },
    /// Choose the entry under the picker cursor.
    PickerConfirm,
    /// Close the picker without choosing.
    PickerDismiss,

    // --- Address lookup messages ---
    /// A postcode lookup finished.
    AddressesLoaded {
        /// The postcode that was looked up.
        postcode: String,
        /// Formatted option labels, placeholder first.
        options: Vec<String>,
    },
}

impl Message {
    /// Returns `true` if this message moves focus between fields.
    #[must_use]
    pub fn is_focus_change(&self) -> bool {
        matches!(self, Self::FocusNext | Self::FocusPrev)
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use creditsearch_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::PickerDismiss.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message is aimed at the date picker.
    ///
    /// # Examples
    ///
    /// ```
    /// use creditsearch_protocol::Message;
    /// use creditsearch_picker::PickerMessage;
    ///
    /// assert!(Message::Picker(PickerMessage::ToggleMonthPicker).is_picker());
    /// assert!(Message::PickerConfirm.is_picker());
    /// assert!(!Message::Activate.is_picker());
    /// ```
    #[must_use]
    pub fn is_picker(&self) -> bool {
        matches!(
            self,
            Self::Picker(_) | Self::PickerCursor { .. } | Self::PickerConfirm | Self::PickerDismiss
        )
    }
}
