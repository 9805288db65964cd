//! Test fixtures and sample data shared by the integration tests.

#![allow(dead_code)]

use address_book::{Contact, ContactDetails};

/// Valid details for John Doe in New York.
pub fn john_doe() -> ContactDetails {
    ContactDetails {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        address: "123 Main Street".to_string(),
        city: "New York".to_string(),
        state: "Newyork".to_string(),
        zip: "10001".to_string(),
        phone: "1234567890".to_string(),
        email: "john.doe@example.com".to_string(),
    }
}

/// Valid details with the given names and city; other fields derived.
pub fn sample_details(first_name: &str, last_name: &str, city: &str) -> ContactDetails {
    ContactDetails {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        city: city.to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        ..john_doe()
    }
}

/// A constructed contact from [`sample_details`].
pub fn sample_contact(first_name: &str, last_name: &str, city: &str) -> Contact {
    Contact::new(sample_details(first_name, last_name, city))
        .expect("sample details should be valid")
}
