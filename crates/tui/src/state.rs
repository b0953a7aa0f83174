//! Form state management.
//!
//! This module holds everything the form shows apart from the date picker
//! itself: entered values, focus, touched fields, validation errors, the
//! address options and the status line.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use creditsearch_protocol::{FieldErrors, FieldId, FieldKind, FormValues, Title, validate};
use tracing::{debug, info};

/// Outcome shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Neutral progress text.
    Info(String),
    /// The form was submitted.
    Success(String),
    /// Something needs the user's attention.
    Error(String),
}

impl Status {
    /// The text to display.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Success(text) | Self::Error(text) => text,
        }
    }
}

/// Message shown for complete but unusable typed dates.
pub const INVALID_DATE: &str = "Please enter a valid date";

/// The form's state.
///
/// Errors are recomputed after every change but only shown for fields the
/// user has left (touched) or after a submit attempt.
#[derive(Debug, Clone)]
pub struct FormState {
    /// The entered values.
    pub values: FormValues,
    /// The focused field.
    pub focus: FieldId,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Address options from the last lookup, placeholder first.
    pub address_options: Vec<String>,
    /// Index into `address_options`.
    pub address_choice: usize,
    /// Postcode of the lookup in flight, if any.
    pub pending_lookup: Option<String>,
    /// Status bar message.
    pub status: Option<Status>,
    touched: BTreeSet<FieldId>,
    submit_attempted: bool,
    submitted: bool,
    date_text_rejected: bool,
    errors: FieldErrors,
}

impl FormState {
    /// Creates an empty form focused on the first field.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use creditsearch_protocol::FieldId;
    /// use creditsearch_tui::FormState;
    ///
    /// let state = FormState::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    /// assert_eq!(state.focus, FieldId::Title);
    /// // Errors exist but are hidden until the field is touched.
    /// assert!(state.visible_error(FieldId::Title).is_none());
    /// ```
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let values = FormValues::new();
        let errors = validate(&values, today);
        Self {
            values,
            focus: FieldId::Title,
            help_visible: false,
            address_options: Vec::new(),
            address_choice: 0,
            pending_lookup: None,
            status: None,
            touched: BTreeSet::new(),
            submit_attempted: false,
            submitted: false,
            date_text_rejected: false,
            errors,
        }
    }

    /// All current validation errors, shown or not.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns whether `field` has been touched.
    #[must_use]
    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    /// Returns whether the last submit attempt succeeded.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// The error to display for `field`, if any.
    #[must_use]
    pub fn visible_error(&self, field: FieldId) -> Option<&str> {
        if self.submit_attempted || self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Marks `field` as touched.
    pub fn touch(&mut self, field: FieldId) {
        self.touched.insert(field);
    }

    /// Recomputes every field's error.
    ///
    /// A rejected typed date overrides the date of birth's own rule, so the
    /// last committed date cannot be submitted under it.
    pub fn revalidate(&mut self, today: NaiveDate) {
        self.errors = validate(&self.values, today);
        if self.date_text_rejected {
            self.errors.insert(FieldId::DateOfBirth, INVALID_DATE);
        }
    }

    /// Records whether the date field holds complete text that was not
    /// committed. Takes effect on the next [`revalidate`](Self::revalidate).
    pub fn set_date_text_rejected(&mut self, rejected: bool) {
        self.date_text_rejected = rejected;
    }

    /// Moves focus to the next field, touching the one being left.
    pub fn focus_next(&mut self) {
        self.move_focus(self.focus.next());
    }

    /// Moves focus to the previous field, touching the one being left.
    pub fn focus_prev(&mut self) {
        self.move_focus(self.focus.prev());
    }

    /// Moves focus to `field`, touching the one being left.
    pub fn move_focus(&mut self, field: FieldId) {
        if field != self.focus {
            self.touched.insert(self.focus);
            self.focus = field;
        }
    }

    /// Appends `ch` to the focused text field.
    ///
    /// Returns `false` when the focused field does not take text.
    pub fn input_char(&mut self, ch: char) -> bool {
        let field = self.focus;
        let Some(text) = self.values.text_mut(field) else {
            return false;
        };
        text.push(ch);
        if field == FieldId::PostalCode {
            self.clear_address_options();
        }
        true
    }

    /// Removes the last character of the focused text field.
    pub fn backspace(&mut self) -> bool {
        let field = self.focus;
        let Some(text) = self.values.text_mut(field) else {
            return false;
        };
        text.pop();
        if field == FieldId::PostalCode {
            self.clear_address_options();
        }
        true
    }

    /// Steps the focused select by `delta` options.
    ///
    /// The title select always cycles. The address line cycles through the
    /// lookup results once there are any.
    pub fn cycle_option(&mut self, delta: i32) {
        match self.focus {
            FieldId::Title => self.values.title = Title::cycle(self.values.title, delta),
            FieldId::AddressLine if !self.address_options.is_empty() => {
                let len = self.address_options.len() as i64;
                let next = (self.address_choice as i64 + i64::from(delta)).rem_euclid(len);
                self.choose_address(next as usize);
            }
            _ => {}
        }
    }

    /// Toggles the consent checkbox.
    pub fn toggle_confirmation(&mut self) {
        self.values.confirmation = !self.values.confirmation;
        self.touched.insert(FieldId::Confirmation);
    }

    /// Replaces the address options with a lookup's results.
    ///
    /// Results for a postcode other than the one currently entered are
    /// stale and dropped.
    pub fn set_address_options(&mut self, postcode: &str, options: Vec<String>) -> bool {
        if self.pending_lookup.as_deref() == Some(postcode) {
            self.pending_lookup = None;
        }
        if self.values.postal_code.trim() != postcode.trim() {
            debug!(postcode, "dropping stale lookup results");
            return false;
        }

        // A single entry is the "No addresses found" placeholder.
        let found = options.len().saturating_sub(1);
        self.status = Some(if found == 0 {
            Status::Error("No addresses found for that postal code".to_string())
        } else {
            Status::Info(format!("Found {found} addresses"))
        });
        self.address_options = options;
        self.choose_address(0);
        true
    }

    /// Validates everything and records the outcome.
    ///
    /// On failure, focus moves to the first field with an error.
    pub fn attempt_submit(&mut self, today: NaiveDate) -> bool {
        self.submit_attempted = true;
        self.touched.extend(FieldId::ALL);
        self.revalidate(today);

        if let Some(first) = self.errors.first() {
            let count = self.errors.len();
            self.status = Some(Status::Error(if count == 1 {
                "1 field needs attention".to_string()
            } else {
                format!("{count} fields need attention")
            }));
            self.focus = first;
            self.submitted = false;
            return false;
        }

        info!("form submitted");
        self.status = Some(Status::Success(
            "Thank you! Your details were submitted.".to_string(),
        ));
        self.submitted = true;
        true
    }

    /// The kind of the focused field.
    #[must_use]
    pub fn focus_kind(&self) -> FieldKind {
        self.focus.kind()
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay.
    pub fn dismiss_help(&mut self) {
        self.help_visible = false;
    }

    fn choose_address(&mut self, index: usize) {
        self.address_choice = index;
        // Index 0 is always a placeholder.
        self.values.address_line = if index == 0 {
            String::new()
        } else {
            self.address_options.get(index).cloned().unwrap_or_default()
        };
    }

    fn clear_address_options(&mut self) {
        if !self.address_options.is_empty() {
            self.address_options.clear();
            self.address_choice = 0;
            self.values.address_line.clear();
        }
    }
}
