//! Contact model representing a person in an address book.

use crate::domain::{validate_field, ContactField, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw, unvalidated contact fields.
///
/// This is the input shape for [`Contact::new`] and the wire shape that
/// deserialization goes through before a `Contact` exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

impl ContactDetails {
    /// Look up the raw value of `field`.
    fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Address => &self.address,
            ContactField::City => &self.city,
            ContactField::State => &self.state,
            ContactField::Zip => &self.zip,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
        }
    }
}

/// A validated contact.
///
/// Fields are private: the only ways to obtain or change a `Contact` are
/// [`Contact::new`] and [`Contact::apply`], and both enforce the field rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContactDetails")]
pub struct Contact {
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    state: String,
    zip: String,
    phone: String,
    email: String,
}

impl Contact {
    /// Create a new contact, validating every field in render order.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first field that fails its rule.
    pub fn new(details: ContactDetails) -> Result<Self, ValidationError> {
        for field in ContactField::ALL {
            validate_field(field, details.get(field))?;
        }

        Ok(Self {
            first_name: details.first_name,
            last_name: details.last_name,
            address: details.address,
            city: details.city,
            state: details.state,
            zip: details.zip,
            phone: details.phone,
            email: details.email,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether `name` equals the first or last name, ignoring case.
    pub fn matches_name(&self, name: &str) -> bool {
        self.first_name.eq_ignore_ascii_case(name) || self.last_name.eq_ignore_ascii_case(name)
    }

    /// Whether this contact and `other` share the uniqueness key.
    pub fn same_person(&self, other: &Contact) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }

    /// Render all fields in fixed order as one line.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Apply `patch` in place.
    ///
    /// Every present field is validated before anything is written, so a
    /// rejected patch leaves the contact untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first patched field that fails.
    pub fn apply(&mut self, patch: &ContactPatch) -> Result<(), ValidationError> {
        for (field, value) in patch.fields() {
            validate_field(field, value)?;
        }

        if let Some(ref address) = patch.address {
            self.address = address.clone();
        }
        if let Some(ref city) = patch.city {
            self.city = city.clone();
        }
        if let Some(ref state) = patch.state {
            self.state = state.clone();
        }
        if let Some(ref zip) = patch.zip {
            self.zip = zip.clone();
        }
        if let Some(ref phone) = patch.phone {
            self.phone = phone.clone();
        }
        if let Some(ref email) = patch.email {
            self.email = email.clone();
        }

        Ok(())
    }
}

impl TryFrom<ContactDetails> for Contact {
    type Error = ValidationError;

    fn try_from(details: ContactDetails) -> Result<Self, Self::Error> {
        Contact::new(details)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} {}, Address: {}, City: {}, State: {}, Zip: {}, Phone: {}, Email: {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone,
            self.email
        )
    }
}

/// Partial update for a contact.
///
/// Names form the uniqueness key inside an address book and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Present fields with their new values, in render order.
    pub fn fields(&self) -> impl Iterator<Item = (ContactField, &str)> {
        [
            (ContactField::Address, &self.address),
            (ContactField::City, &self.city),
            (ContactField::State, &self.state),
            (ContactField::Zip, &self.zip),
            (ContactField::Phone, &self.phone),
            (ContactField::Email, &self.email),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}
