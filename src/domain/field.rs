//! Contact field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The validated fields of a contact, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    Phone,
    Email,
}

impl ContactField {
    /// All fields in the fixed render order.
    pub const ALL: [ContactField; 8] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Address,
        ContactField::City,
        ContactField::State,
        ContactField::Zip,
        ContactField::Phone,
        ContactField::Email,
    ];

    /// The camelCase name used in messages and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
