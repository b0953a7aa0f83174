//! The credit search form model.
//!
//! This module defines the form's fields, their static metadata, and the
//! [`FormValues`] struct that holds what the applicant has entered.

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text.
    Text,
    /// One of a fixed list of options.
    Select,
    /// The bounded date picker.
    Date,
    /// A single checkbox.
    Checkbox,
}

/// Identifies a form field.
///
/// The variants are declared in display order, which is also the focus
/// order of the form.
///
/// # Examples
///
/// ```
/// use creditsearch_protocol::FieldId;
///
/// assert_eq!(FieldId::DateOfBirth.name(), "dateOfBirth");
/// assert_eq!(FieldId::from_name("dateOfBirth"), Some(FieldId::DateOfBirth));
/// assert_eq!(FieldId::Title.next(), FieldId::FirstName);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    /// Salutation.
    #[default]
    Title,
    /// Given name.
    FirstName,
    /// Optional middle name.
    MiddleName,
    /// Family name.
    LastName,
    /// Date of birth, edited with the date picker.
    DateOfBirth,
    /// Mobile phone number.
    Mobile,
    /// Email address.
    Email,
    /// UK or US postal code.
    PostalCode,
    /// First address line, usually chosen from a postcode lookup.
    AddressLine,
    /// Terms and soft credit check consent.
    #[serde(rename = "confirmationCheckbox")]
    Confirmation,
}

impl FieldId {
    /// All fields in display order.
    pub const ALL: [FieldId; 10] = [
        Self::Title,
        Self::FirstName,
        Self::MiddleName,
        Self::LastName,
        Self::DateOfBirth,
        Self::Mobile,
        Self::Email,
        Self::PostalCode,
        Self::AddressLine,
        Self::Confirmation,
    ];

    /// The field's form name, as reported in date picker commits.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::FirstName => "firstName",
            Self::MiddleName => "middleName",
            Self::LastName => "lastName",
            Self::DateOfBirth => "dateOfBirth",
            Self::Mobile => "mobile",
            Self::Email => "email",
            Self::PostalCode => "postalCode",
            Self::AddressLine => "addressLine",
            Self::Confirmation => "confirmationCheckbox",
        }
    }

    /// Looks a field up by its form name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// The label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::FirstName => "First Name",
            Self::MiddleName => "Middle Name",
            Self::LastName => "Last Name",
            Self::DateOfBirth => "Date of Birth",
            Self::Mobile => "Mobile",
            Self::Email => "Email",
            Self::PostalCode => "Postal Code",
            Self::AddressLine => "Address Line",
            Self::Confirmation => "I confirm",
        }
    }

    /// Returns whether the label carries a required marker.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::MiddleName)
    }

    /// Hint shown under the field, if any.
    #[must_use]
    pub const fn help_text(self) -> Option<&'static str> {
        match self {
            Self::MiddleName => Some("Optional"),
            Self::AddressLine => Some("Look up your postal code to choose an address."),
            Self::Confirmation => Some(CONFIRMATION_TEXT),
            _ => None,
        }
    }

    /// Placeholder shown while the field is empty, if any.
    #[must_use]
    pub const fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Mobile => Some("e.g., +44 7123 456789"),
            _ => None,
        }
    }

    /// How the field is edited.
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Title => FieldKind::Select,
            Self::DateOfBirth => FieldKind::Date,
            Self::Confirmation => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    /// The field after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The field before this one, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Position in display order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&field| field == self)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Consent statement shown next to the confirmation checkbox.
pub const CONFIRMATION_TEXT: &str = "I confirm that I have had a finance in the past 6 years \
and that I was not aware of a commission payment being made to the dealer. I have read and \
accept T&Cs and the privacy policy. I understand that in order for us to investigate any \
further, we will conduct a soft credit check through our provider ValidID and that this will \
not affect my credit score.";

/// Salutation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    /// Mr
    Mr,
    /// Mrs
    Mrs,
    /// Ms
    Ms,
    /// Dr
    Dr,
    /// Other
    Other,
}

impl Title {
    /// All options in display order.
    pub const ALL: [Title; 5] = [Self::Mr, Self::Mrs, Self::Ms, Self::Dr, Self::Other];

    /// The option's label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mr => "Mr",
            Self::Mrs => "Mrs",
            Self::Ms => "Ms",
            Self::Dr => "Dr",
            Self::Other => "Other",
        }
    }

    /// Steps through the options from `current`, where `None` is the
    /// unselected placeholder that sits before the first option.
    ///
    /// # Examples
    ///
    /// ```
    /// use creditsearch_protocol::Title;
    ///
    /// assert_eq!(Title::cycle(None, 1), Some(Title::Mr));
    /// assert_eq!(Title::cycle(Some(Title::Mr), -1), None);
    /// assert_eq!(Title::cycle(None, -1), Some(Title::Other));
    /// ```
    #[must_use]
    pub fn cycle(current: Option<Self>, delta: i32) -> Option<Self> {
        // Slot 0 is the placeholder.
        let slots = Self::ALL.len() as i32 + 1;
        let position = current
            .and_then(|title| Self::ALL.iter().position(|&t| t == title))
            .map_or(0, |index| index as i32 + 1);
        let next = (position + delta).rem_euclid(slots);
        (next > 0).then(|| Self::ALL[(next - 1) as usize])
    }
}

impl std::str::FromStr for Title {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|title| title.as_str() == s)
            .ok_or_else(|| ProtocolError::InvalidOption {
                field: FieldId::Title,
                value: s.to_string(),
            })
    }
}

/// The values entered into the form.
///
/// The date of birth only ever holds a value committed by the date picker,
/// in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    /// Selected salutation.
    pub title: Option<Title>,
    /// Given name.
    pub first_name: String,
    /// Middle name.
    pub middle_name: String,
    /// Family name.
    pub last_name: String,
    /// Committed date of birth.
    pub date_of_birth: Option<String>,
    /// Mobile phone number.
    pub mobile: String,
    /// Email address.
    pub email: String,
    /// Postal code.
    pub postal_code: String,
    /// First address line.
    pub address_line: String,
    /// Whether the consent box is ticked.
    #[serde(rename = "confirmationCheckbox")]
    pub confirmation: bool,
}

impl FormValues {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows a free-text field's value.
    ///
    /// Returns `None` for fields that are not free text.
    #[must_use]
    pub fn text(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::FirstName => Some(&self.first_name),
            FieldId::MiddleName => Some(&self.middle_name),
            FieldId::LastName => Some(&self.last_name),
            FieldId::Mobile => Some(&self.mobile),
            FieldId::Email => Some(&self.email),
            FieldId::PostalCode => Some(&self.postal_code),
            FieldId::AddressLine => Some(&self.address_line),
            FieldId::Title | FieldId::DateOfBirth | FieldId::Confirmation => None,
        }
    }

    /// Mutably borrows a free-text field's value.
    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::FirstName => Some(&mut self.first_name),
            FieldId::MiddleName => Some(&mut self.middle_name),
            FieldId::LastName => Some(&mut self.last_name),
            FieldId::Mobile => Some(&mut self.mobile),
            FieldId::Email => Some(&mut self.email),
            FieldId::PostalCode => Some(&mut self.postal_code),
            FieldId::AddressLine => Some(&mut self.address_line),
            FieldId::Title | FieldId::DateOfBirth | FieldId::Confirmation => None,
        }
    }

    /// The field's value as display text.
    #[must_use]
    pub fn display_value(&self, field: FieldId) -> String {
        match field {
            FieldId::Title => self.title.map(Title::as_str).unwrap_or_default().to_string(),
            FieldId::DateOfBirth => self.date_of_birth.clone().unwrap_or_default(),
            FieldId::Confirmation => (if self.confirmation { "yes" } else { "no" }).to_string(),
            _ => self.text(field).unwrap_or_default().to_string(),
        }
    }

    /// Stores a value reported by a field widget, keyed by form name.
    ///
    /// This is how date picker commits reach the form.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnknownField`] for an unrecognised name and
    /// [`ProtocolError::InvalidOption`] for an unknown title or a checkbox
    /// value other than `true`/`false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use creditsearch_protocol::FormValues;
    ///
    /// let mut values = FormValues::new();
    /// values.set_field_value("dateOfBirth", "2000-02-29").unwrap();
    /// assert_eq!(values.date_of_birth.as_deref(), Some("2000-02-29"));
    /// assert!(values.set_field_value("favouriteColour", "blue").is_err());
    /// ```
    pub fn set_field_value(&mut self, name: &str, value: &str) -> Result<()> {
        let field =
            FieldId::from_name(name).ok_or_else(|| ProtocolError::UnknownField(name.to_string()))?;
        match field {
            FieldId::Title => self.title = Some(value.parse()?),
            FieldId::DateOfBirth => self.date_of_birth = Some(value.to_string()),
            FieldId::Confirmation => {
                self.confirmation = value.parse().map_err(|_| ProtocolError::InvalidOption {
                    field,
                    value: value.to_string(),
                })?;
            }
            _ => {
                if let Some(text) = self.text_mut(field) {
                    *text = value.to_string();
                }
            }
        }
        Ok(())
    }
}
