//! Widget components for the creditsearch TUI.
//!
//! Each widget is a pure function that renders state to a buffer, which
//! keeps them easy to test and compose.
//!
//! # Modules
//!
//! - [`form`]: Renders the form fields with their errors and hints
//! - [`date_picker`]: Renders the date picker popup and hit-tests clicks on it
//! - [`help`]: Renders the keybinding overlay
//! - [`status_bar`]: Renders the footer with the status message and hints

pub mod date_picker;
pub mod form;
pub mod help;
pub mod status_bar;

pub use date_picker::{PickerHit, hit_test, render_date_picker};
pub use form::{render_form, typed_date_rejected};
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
