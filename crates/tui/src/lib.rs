//! Terminal UI for the creditsearch form.
//!
//! This crate renders the lead-capture form with Ratatui and hosts the
//! bounded date picker as a popup under the date-of-birth field.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Form state, focus and visible errors
//! - [`picker_cursor`]: Keyboard cursor inside the calendar popup
//! - [`layout`]: Field and popup geometry shared by rendering and clicks
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Form, calendar, status bar and help rendering
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use creditsearch_picker::{DateBounds, DateFieldProps};
//! use creditsearch_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let today = Local::now().date_naive();
//!     let bounds = DateBounds::new(today - chrono::Days::new(365 * 100), today)?;
//!     let props = DateFieldProps::new("Date of Birth", "dateOfBirth", bounds).required(true);
//!
//!     terminal::install_panic_hook();
//!     let mut session = terminal::TerminalSession::start()?;
//!     let mut app = App::new(props, today);
//!     let result = app.run(&mut session).await;
//!
//!     session.finish()?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod picker_cursor;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::{App, Effect};
pub use picker_cursor::PickerCursor;
pub use state::{FormState, Status};
