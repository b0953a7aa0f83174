//! Form validation rules.
//!
//! [`validate`] checks every field of a [`FormValues`] and returns the
//! first failing rule's message per field. Which of those messages are
//! shown is up to the host: typically only touched fields, or every field
//! after a submit attempt.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use creditsearch_picker::parse_canonical;
use regex::Regex;

use crate::form::{FieldId, FormValues};

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("mobile pattern is valid"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static POSTAL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}$|^[0-9]{5}(-[0-9]{4})?$")
        .expect("postal code pattern is valid")
});

/// Validation messages keyed by field, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldId, String>);

impl FieldErrors {
    /// Returns whether every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Returns whether `field` failed.
    #[must_use]
    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains_key(&field)
    }

    /// Failing fields and their messages, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.0.iter().map(|(&field, message)| (field, message.as_str()))
    }

    /// The first failing field in display order.
    #[must_use]
    pub fn first(&self) -> Option<FieldId> {
        self.0.keys().next().copied()
    }

    /// Records `message` for `field`, replacing any earlier message.
    ///
    /// Hosts use this for rules that depend on widget state the form
    /// values do not carry, such as rejected typed text.
    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Validates every field.
///
/// `today` is the reference for the "not in the future" rule on the date
/// of birth.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use creditsearch_protocol::{FieldId, FormValues, validate};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let errors = validate(&FormValues::new(), today);
/// assert_eq!(errors.get(FieldId::Title), Some("Title is required"));
/// assert!(!errors.contains(FieldId::MiddleName));
/// ```
#[must_use]
pub fn validate(values: &FormValues, today: NaiveDate) -> FieldErrors {
    FieldErrors(
        FieldId::ALL
            .into_iter()
            .filter_map(|field| validate_field(values, field, today).map(|msg| (field, msg)))
            .collect(),
    )
}

/// Validates a single field, returning the first failing rule's message.
#[must_use]
pub fn validate_field(values: &FormValues, field: FieldId, today: NaiveDate) -> Option<String> {
    let message = match field {
        FieldId::Title => values.title.is_none().then_some("Title is required"),
        FieldId::FirstName => required(&values.first_name, "First name is required"),
        FieldId::MiddleName => None,
        FieldId::LastName => required(&values.last_name, "Last name is required"),
        FieldId::DateOfBirth => validate_date_of_birth(values.date_of_birth.as_deref(), today),
        FieldId::Mobile => required(&values.mobile, "Mobile number is required").or_else(|| {
            (!MOBILE_RE.is_match(&values.mobile)).then_some("Please enter a valid mobile number")
        }),
        FieldId::Email => required(&values.email, "Email is required")
            .or_else(|| (!EMAIL_RE.is_match(&values.email)).then_some("Invalid email format")),
        FieldId::PostalCode => required(&values.postal_code, "Postal code is required").or_else(|| {
            (!POSTAL_CODE_RE.is_match(&values.postal_code))
                .then_some("Please enter a valid postal code")
        }),
        FieldId::AddressLine => (!values.postal_code.is_empty())
            .then(|| {
                required(
                    &values.address_line,
                    "Address is required when postal code is provided",
                )
            })
            .flatten(),
        FieldId::Confirmation => (!values.confirmation)
            .then_some("You must accept the terms and conditions"),
    };
    message.map(str::to_string)
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

fn validate_date_of_birth(value: Option<&str>, today: NaiveDate) -> Option<&'static str> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Some("Date of birth is required");
    };
    match parse_canonical(value) {
        Ok(date) if date > today => Some("Date of birth cannot be in the future"),
        Ok(_) => None,
        Err(_) => Some("Please enter a valid date"),
    }
}
