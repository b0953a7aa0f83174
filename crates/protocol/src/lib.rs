//! Shared protocol types for the credit search application.
//!
//! This crate defines the types shared by the terminal host and the binary:
//! the form's fields and values, its validation rules, and the messages the
//! input handler sends to the application state.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`form`]: field identifiers, metadata, and the `FormValues` struct
//! - [`validation`]: per-field rules and their messages
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for form updates
//!
//! # Examples
//!
//! Applying a date picker commit and validating the form:
//!
//! ```
//! use chrono::NaiveDate;
//! use creditsearch_protocol::{FieldId, FormValues, validate};
//!
//! let mut values = FormValues::new();
//! values.set_field_value("dateOfBirth", "1985-12-10").unwrap();
//!
//! let errors = validate(&values, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
//! assert!(!errors.contains(FieldId::DateOfBirth));
//! assert!(errors.contains(FieldId::Email));
//! ```

pub mod error;
pub mod form;
pub mod message;
pub mod validation;

// Re-export primary types at crate root for convenience
pub use error::{ProtocolError, Result};
pub use form::{CONFIRMATION_TEXT, FieldId, FieldKind, FormValues, Title};
pub use message::Message;
pub use validation::{FieldErrors, validate, validate_field};
