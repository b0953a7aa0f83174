//! Address records and select options.

use serde::{Deserialize, Serialize};

/// Label of the leading option when addresses were found.
pub const SELECT_PLACEHOLDER: &str = "Select address";

/// Label of the only option when no address was found.
pub const NO_RESULTS: &str = "No addresses found";

/// An address as returned by the postcode endpoint.
///
/// Every field is optional; the service omits empty parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street number.
    #[serde(default)]
    pub building_number: Option<String>,
    /// Building name, used when there is no number.
    #[serde(default)]
    pub building_name: Option<String>,
    /// Street.
    #[serde(default)]
    pub thoroughfare: Option<String>,
    /// Locality within the post town.
    #[serde(default)]
    pub locality: Option<String>,
    /// Post town.
    #[serde(default)]
    pub post_town: Option<String>,
    /// County.
    #[serde(default)]
    pub county: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
    /// Postcode.
    #[serde(default)]
    pub postcode: Option<String>,
}

fn present(part: Option<&String>) -> Option<&str> {
    part.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl Address {
    /// Formats the address as a single line.
    ///
    /// # Examples
    ///
    /// ```
    /// use creditsearch_lookup::Address;
    ///
    /// let address = Address {
    ///     building_number: Some("10".to_string()),
    ///     thoroughfare: Some("Downing Street".to_string()),
    ///     post_town: Some("London".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(address.line(), "10 Downing Street, London");
    /// ```
    #[must_use]
    pub fn line(&self) -> String {
        let building =
            present(self.building_number.as_ref()).or(present(self.building_name.as_ref()));
        let street = [building, present(self.thoroughfare.as_ref())]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        let tail = [
            &self.locality,
            &self.post_town,
            &self.county,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| present(part.as_ref()));

        std::iter::once(street.as_str())
            .filter(|s| !s.is_empty())
            .chain(tail)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One entry of the address select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressOption {
    /// Value stored in the form; empty for the placeholder entries.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
    /// The source address, absent for placeholder entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl AddressOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            address: None,
        }
    }

    /// Returns `true` for the placeholder entries.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.address.is_none()
    }
}

/// Turns lookup results into select options.
///
/// The list starts with a "Select address" placeholder, or consists of a
/// single "No addresses found" entry when there are no results.
///
/// # Examples
///
/// ```
/// use creditsearch_lookup::{Address, format_address_options};
///
/// let options = format_address_options(&[]);
/// assert_eq!(options.len(), 1);
/// assert_eq!(options[0].label, "No addresses found");
///
/// let address = Address {
///     building_name: Some("Rose Cottage".to_string()),
///     thoroughfare: Some("Mill Lane".to_string()),
///     ..Default::default()
/// };
/// let options = format_address_options(&[address]);
/// assert_eq!(options[0].label, "Select address");
/// assert_eq!(options[1].value, "Rose Cottage Mill Lane");
/// ```
#[must_use]
pub fn format_address_options(addresses: &[Address]) -> Vec<AddressOption> {
    if addresses.is_empty() {
        return vec![AddressOption::placeholder(NO_RESULTS)];
    }

    std::iter::once(AddressOption::placeholder(SELECT_PLACEHOLDER))
        .chain(addresses.iter().map(|address| {
            let line = address.line();
            AddressOption {
                value: line.clone(),
                label: line,
                address: Some(address.clone()),
            }
        }))
        .collect()
}
