//! Bounded date picker for the credit search form.
//!
//! This crate holds everything about the date-of-birth field that does not
//! depend on a terminal: calendar arithmetic, day grid generation, the
//! month and year quick pickers, the text codec, and the controller state
//! machine that ties them together.
//!
//! # Overview
//!
//! - [`calendar`]: leap years, month lengths, first weekday, month stepping
//! - [`bounds`]: the inclusive `[min, max]` range and month clamping
//! - [`grid`]: the blank-padded day grid for a viewed month
//! - [`quick_pick`]: month and year quick-pick entries
//! - [`codec`]: display-format parsing and canonical `YYYY-MM-DD` output
//! - [`dismissal`]: panel exclusivity and outside-interaction dismissal
//! - [`controller`]: the [`DatePicker`] state machine
//! - [`message`]: interactions fed into the controller
//! - [`error`]: parse and bounds errors
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use creditsearch_picker::{
//!     DateBounds, DateFieldProps, DatePicker, PickerMessage, PickerState, Panel,
//! };
//!
//! let bounds = DateBounds::new(
//!     NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2003, 12, 31).unwrap(),
//! )
//! .unwrap();
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let mut picker = DatePicker::new(DateFieldProps::new("Date of Birth", "dateOfBirth", bounds), today);
//!
//! picker.update(PickerMessage::Activate);
//! assert_eq!(picker.state(), PickerState::Open(Panel::DayGrid));
//!
//! let commit = picker.update(PickerMessage::SelectDay { day: 15 }).unwrap();
//! assert_eq!(commit.value, "2003-12-15");
//! assert_eq!(picker.input_buffer(), "15-12-2003");
//! assert_eq!(picker.state(), PickerState::Closed);
//! ```

pub mod bounds;
pub mod calendar;
pub mod codec;
pub mod controller;
pub mod dismissal;
pub mod error;
pub mod grid;
pub mod message;
pub mod quick_pick;

pub use bounds::DateBounds;
pub use calendar::{MONTH_ABBREVIATIONS, MONTH_NAMES, ViewedMonth, WeekStart};
pub use codec::{DATE_TEXT_LEN, DisplayFormat, FieldOrder, parse_canonical, to_canonical};
pub use controller::{Commit, DateFieldProps, DatePicker, PickerState};
pub use dismissal::{DismissalPolicy, InteractionOrigin, Panel};
pub use error::{ParseFailure, PickerError, Result};
pub use grid::DayCell;
pub use message::PickerMessage;
pub use quick_pick::{MonthEntry, YearEntry};
