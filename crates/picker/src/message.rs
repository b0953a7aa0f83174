//! Input events routed into the picker controller.

use serde::{Deserialize, Serialize};

use crate::dismissal::InteractionOrigin;

/// A single user interaction with the date field or its popup.
///
/// # Examples
///
/// ```
/// use creditsearch_picker::PickerMessage;
///
/// let msg: PickerMessage = serde_json::from_str(r#"{"navigate_month":{"delta":-1}}"#).unwrap();
/// assert_eq!(msg, PickerMessage::NavigateMonth { delta: -1 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerMessage {
    /// The text field was clicked or focused for picking.
    Activate,
    /// The calendar button was pressed.
    ToggleCalendar,
    /// The month label in the header was pressed.
    ToggleMonthPicker,
    /// The year label in the header was pressed.
    ToggleYearPicker,
    /// A previous/next month arrow was pressed.
    NavigateMonth {
        /// Months to move (negative = backwards).
        delta: i32,
    },
    /// A day cell of the viewed month was chosen.
    SelectDay {
        /// Day of month.
        day: u32,
    },
    /// A month quick-pick entry was chosen.
    SelectMonth {
        /// Zero-based month.
        month: u32,
    },
    /// A year quick-pick entry was chosen.
    SelectYear {
        /// Calendar year.
        year: i32,
    },
    /// The text field's content was replaced.
    EditText {
        /// The full new content.
        text: String,
    },
    /// A character was typed at the end of the text field.
    InputChar {
        /// The typed character.
        ch: char,
    },
    /// The last character of the text field was deleted.
    Backspace,
    /// A pointer or focus interaction happened somewhere on screen.
    Interaction {
        /// Where it happened relative to the picker.
        origin: InteractionOrigin,
    },
}
