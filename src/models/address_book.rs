//! A named collection of unique contacts.

use crate::error::{AddressBookError, AddressBookResult, MatchingResult};
use crate::matching::{ContactMatcher, ContactQuery, MatchResult};
use crate::models::{Contact, ContactPatch};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Field used to order contacts in [`AddressBook::sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    FirstName,
    LastName,
    City,
    State,
    Zip,
}

/// A named address book.
///
/// Contacts are kept in insertion order until sorted. No two contacts share
/// the same exact first and last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAddressBook")]
pub struct AddressBook {
    name: String,
    contacts: Vec<Contact>,
}

#[derive(Deserialize)]
struct RawAddressBook {
    name: String,
    #[serde(default)]
    contacts: Vec<Contact>,
}

impl TryFrom<RawAddressBook> for AddressBook {
    type Error = AddressBookError;

    fn try_from(raw: RawAddressBook) -> Result<Self, Self::Error> {
        let mut book = AddressBook::new(raw.name);
        for contact in raw.contacts {
            book.add_contact(contact)?;
        }
        Ok(book)
    }
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contacts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Borrow the contacts in current order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Append a contact.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicateContact` if a contact with the same
    /// first and last name is already present.
    pub fn add_contact(&mut self, contact: Contact) -> AddressBookResult<()> {
        if self.contacts.iter().any(|c| c.same_person(&contact)) {
            warn!(
                book = %self.name,
                contact = %contact.full_name(),
                "Rejected duplicate contact"
            );
            return Err(AddressBookError::DuplicateContact {
                first_name: contact.first_name().to_string(),
                last_name: contact.last_name().to_string(),
            });
        }

        info!(book = %self.name, contact = %contact.full_name(), "Added contact");
        self.contacts.push(contact);
        Ok(())
    }

    /// Remove the first contact whose first or last name matches `name`,
    /// ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NotFound` if no contact matches.
    pub fn remove_contact(&mut self, name: &str) -> AddressBookResult<Contact> {
        let index = self
            .position_by_name(name)
            .ok_or_else(|| self.contact_not_found("name", name))?;

        let removed = self.contacts.remove(index);
        info!(book = %self.name, contact = %removed.full_name(), "Removed contact");
        Ok(removed)
    }

    /// Remove the first contact whose email matches, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NotFound` if no contact matches.
    pub fn remove_by_email(&mut self, email: &str) -> AddressBookResult<Contact> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.email().eq_ignore_ascii_case(email))
            .ok_or_else(|| self.contact_not_found("email", email))?;

        let removed = self.contacts.remove(index);
        info!(book = %self.name, contact = %removed.full_name(), "Removed contact");
        Ok(removed)
    }

    /// First contact whose email matches, ignoring case.
    pub fn find_by_email(&self, email: &str) -> Option<&Contact> {
        debug!(book = %self.name, email, "Looking up contact by email");
        self.contacts
            .iter()
            .find(|c| c.email().eq_ignore_ascii_case(email))
    }

    /// First contact whose first or last name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        debug!(book = %self.name, name, "Looking up contact by name");
        self.contacts.iter().find(|c| c.matches_name(name))
    }

    /// Apply `patch` to the first contact matching `name`.
    ///
    /// The patch is validated with the same rules as construction; a rejected
    /// patch changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NotFound` if no contact matches, or
    /// `AddressBookError::Validation` if a patched field is invalid.
    pub fn update_by_name(&mut self, name: &str, patch: &ContactPatch) -> AddressBookResult<&Contact> {
        let index = self
            .position_by_name(name)
            .ok_or_else(|| self.contact_not_found("name", name))?;

        let contact = &mut self.contacts[index];
        if let Err(e) = contact.apply(patch) {
            warn!(book = %self.name, contact = %contact.full_name(), error = %e, "Rejected contact update");
            return Err(e.into());
        }

        info!(book = %self.name, contact = %contact.full_name(), "Updated contact");
        Ok(contact)
    }

    /// Owned copy of all contacts in current order.
    pub fn list(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    /// Contacts whose city equals `city`, ignoring case, in current order.
    pub fn filter_by_city(&self, city: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.city().to_lowercase() == city.to_lowercase())
            .collect()
    }

    /// Contacts whose state equals `state`, ignoring case, in current order.
    pub fn filter_by_state(&self, state: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.state().to_lowercase() == state.to_lowercase())
            .collect()
    }

    pub fn count_by_city(&self, city: &str) -> usize {
        self.filter_by_city(city).len()
    }

    pub fn count_by_state(&self, state: &str) -> usize {
        self.filter_by_state(state).len()
    }

    /// Sort ascending by first name (case-sensitive, stable).
    pub fn sort_by_first_name(&mut self) {
        self.sort_by(SortKey::FirstName);
    }

    /// Sort ascending by `key` (case-sensitive, stable).
    pub fn sort_by(&mut self, key: SortKey) {
        debug!(book = %self.name, ?key, "Sorting contacts");
        self.contacts.sort_by(|a, b| match key {
            SortKey::FirstName => a.first_name().cmp(b.first_name()),
            SortKey::LastName => a.last_name().cmp(b.last_name()),
            SortKey::City => a.city().cmp(b.city()),
            SortKey::State => a.state().cmp(b.state()),
            SortKey::Zip => a.zip().cmp(b.zip()),
        });
    }

    /// Fuzzy search over this book's contacts.
    ///
    /// # Errors
    ///
    /// Returns `MatchingError::InvalidQuery` for a blank query.
    pub fn search(
        &self,
        query: &ContactQuery,
        max_results: usize,
        min_confidence: u8,
    ) -> MatchingResult<Vec<MatchResult<'_>>> {
        ContactMatcher::new().find_matches(query, &self.contacts, max_results, min_confidence)
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.matches_name(name))
    }

    fn contact_not_found(&self, by: &str, value: &str) -> AddressBookError {
        warn!(book = %self.name, by, value, "Contact not found");
        AddressBookError::NotFound(format!(
            "no contact with {} '{}' in address book '{}'",
            by, value, self.name
        ))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactField;
    use crate::models::ContactDetails;

    fn contact(first: &str, last: &str, city: &str) -> Contact {
        Contact::new(ContactDetails {
            first_name: first.to_string(),
            last_name: last.to_string(),
            address: "123 Main Street".to_string(),
            city: city.to_string(),
            state: "Newyork".to_string(),
            zip: "10001".to_string(),
            phone: "1234567890".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
        })
        .unwrap()
    }

    fn first_names(book: &AddressBook) -> Vec<&str> {
        book.iter().map(|c| c.first_name()).collect()
    }

    #[test]
    fn test_add_rejects_duplicate_name_pair() {
        let mut book = AddressBook::new("Work");
        book.add_contact(contact("John", "Doe", "New York")).unwrap();

        let err = book
            .add_contact(contact("John", "Doe", "Boston"))
            .unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicateContact { .. }));
        assert_eq!(book.len(), 1);

        book.add_contact(contact("John", "Smith", "Boston")).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_remove_contact_first_match_only() {
        let mut book = AddressBook::new("Work");
        book.add_contact(contact("John", "Doe", "New York")).unwrap();
        book.add_contact(contact("Jane", "Doe", "New York")).unwrap();

        let removed = book.remove_contact("doe").unwrap();
        assert_eq!(removed.first_name(), "John");
        assert_eq!(first_names(&book), vec!["Jane"]);
    }

    #[test]
    fn test_remove_missing_fails() {
        let mut book = AddressBook::new("Work");
        book.add_contact(contact("John", "Doe", "New York")).unwrap();

        assert!(matches!(
            book.remove_contact("Nobody"),
            Err(AddressBookError::NotFound(_))
        ));
        assert!(matches!(
            book.remove_by_email("nobody@example.com"),
            Err(AddressBookError::NotFound(_))
        ));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_remove_by_email() {
        let mut book = AddressBook::new("Work");
        book.add_contact(contact("John", "Doe", "New York")).unwrap();

        let removed = book.remove_by_email("JOHN@example.com").unwrap();
        assert_eq!(removed.last_name(), "Doe");
        assert!(book.is_empty());
    }

    #[test]
    fn test_find() {
        let mut book = AddressBook::new("Work");
        book.add_contact(contact("John", "Doe", "New York")).unwrap();

        assert!(book.find_by_name("JOHN").is_some());
        assert!(book.find_by_name("doe").is_some());
        assert!(book.find_by_name("Jane").is_none());
        assert!(book.find_by_email("john@example.com").is_some());
        assert!(book.find_by_email("jane@example.com").is_none());
    }

    #[test]
    fn test_update_rejects_invalid_patch() {
        let mut book = AddressBook::new("Work");
        book.add_contact(contact("John", "Doe", "New York")).unwrap();
        let patch = ContactPatch {
            zip: Some("12".to_string()),
            ..Default::default()
        };

        match book.update_by_name("John", &patch) {
            Err(AddressBookError::Validation(e)) => assert_eq!(e.field, ContactField::Zip),
            other => panic!("Expected validation error, got: {:?}", other),
        }
        assert_eq!(book.contacts()[0].zip(), "10001");
    }

    #[test]
    fn test_filter_and_count() {
        let mut book = AddressBook::new("Work");
        book.add_contact(contact("John", "Doe", "New York")).unwrap();
        book.add_contact(contact("Jane", "Roe", "Boston")).unwrap();
        book.add_contact(contact("Amy", "Poe", "NEW YORK")).unwrap();

        let in_ny: Vec<&str> = book
            .filter_by_city("new york")
            .iter()
            .map(|c| c.first_name())
            .collect();
        assert_eq!(in_ny, vec!["John", "Amy"]);
        assert_eq!(book.count_by_city("Boston"), 1);
        assert_eq!(book.count_by_state("NEWYORK"), 3);
        assert_eq!(book.count_by_state("Texas"), 0);
    }

    #[test]
    fn test_sort_by_first_name() {
        let mut book = AddressBook::new("Work");
        book.add_contact(contact("John", "Doe", "New York")).unwrap();
        book.add_contact(contact("Jane", "Doe", "New York")).unwrap();
        book.add_contact(contact("Amy", "Doe", "New York")).unwrap();

        book.sort_by_first_name();
        assert_eq!(first_names(&book), vec!["Amy", "Jane", "John"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut book = AddressBook::new("Work");
        book.add_contact(contact("John", "Doe", "Boston")).unwrap();
        book.add_contact(contact("Amy", "Roe", "Austin")).unwrap();
        book.add_contact(contact("Jane", "Poe", "Boston")).unwrap();

        book.sort_by(SortKey::City);
        assert_eq!(first_names(&book), vec!["Amy", "John", "Jane"]);
    }

    #[test]
    fn test_deserialization_rejects_duplicates() {
        let mut book = AddressBook::new("Work");
        book.add_contact(contact("John", "Doe", "New York")).unwrap();
        let json = serde_json::to_string(&book).unwrap();

        let parsed: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = value["contacts"][0].clone();
        value["contacts"].as_array_mut().unwrap().push(first);
        let result: Result<AddressBook, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }
}
