//! A collection of uniquely named address books.

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{AddressBook, Contact};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Owns a set of address books, each with a unique name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSystem")]
pub struct AddressBookSystem {
    books: Vec<AddressBook>,
}

#[derive(Deserialize)]
struct RawSystem {
    #[serde(default)]
    books: Vec<AddressBook>,
}

impl TryFrom<RawSystem> for AddressBookSystem {
    type Error = AddressBookError;

    fn try_from(raw: RawSystem) -> Result<Self, Self::Error> {
        let mut system = AddressBookSystem::new();
        for book in raw.books {
            if system.get_address_book(book.name()).is_some() {
                return Err(AddressBookError::DuplicateName(book.name().to_string()));
            }
            system.books.push(book);
        }
        Ok(system)
    }
}

impl AddressBookSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and append an empty address book.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicateName` if a book named `name` exists.
    pub fn create_address_book(&mut self, name: &str) -> AddressBookResult<&mut AddressBook> {
        if self.get_address_book(name).is_some() {
            warn!(book = name, "Rejected duplicate address book");
            return Err(AddressBookError::DuplicateName(name.to_string()));
        }

        info!(book = name, "Created address book");
        self.books.push(AddressBook::new(name));
        let index = self.books.len() - 1;
        Ok(&mut self.books[index])
    }

    /// Look up a book by exact name. Absence is not an error.
    pub fn get_address_book(&self, name: &str) -> Option<&AddressBook> {
        self.books.iter().find(|b| b.name() == name)
    }

    pub fn get_address_book_mut(&mut self, name: &str) -> Option<&mut AddressBook> {
        self.books.iter_mut().find(|b| b.name() == name)
    }

    /// Remove a book and all of its contacts.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NotFound` if no book is named `name`.
    pub fn remove_address_book(&mut self, name: &str) -> AddressBookResult<AddressBook> {
        let index = self
            .books
            .iter()
            .position(|b| b.name() == name)
            .ok_or_else(|| {
                AddressBookError::NotFound(format!("no address book named '{}'", name))
            })?;

        info!(book = name, "Removed address book");
        Ok(self.books.remove(index))
    }

    /// Book names in creation order.
    pub fn book_names(&self) -> Vec<&str> {
        self.books.iter().map(|b| b.name()).collect()
    }

    pub fn books(&self) -> &[AddressBook] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Contacts in `city` across every book, as `(book name, contact)` pairs.
    pub fn search_by_city(&self, city: &str) -> Vec<(&str, &Contact)> {
        self.books
            .iter()
            .flat_map(|b| b.filter_by_city(city).into_iter().map(move |c| (b.name(), c)))
            .collect()
    }

    /// Contacts in `state` across every book, as `(book name, contact)` pairs.
    pub fn search_by_state(&self, state: &str) -> Vec<(&str, &Contact)> {
        self.books
            .iter()
            .flat_map(|b| b.filter_by_state(state).into_iter().map(move |c| (b.name(), c)))
            .collect()
    }

    pub fn count_by_city(&self, city: &str) -> usize {
        self.books.iter().map(|b| b.count_by_city(city)).sum()
    }

    pub fn count_by_state(&self, state: &str) -> usize {
        self.books.iter().map(|b| b.count_by_state(state)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactDetails;

    fn contact(first: &str, city: &str) -> Contact {
        Contact::new(ContactDetails {
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            address: "123 Main Street".to_string(),
            city: city.to_string(),
            state: "Newyork".to_string(),
            zip: "10001".to_string(),
            phone: "1234567890".to_string(),
            email: "doe@example.com".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_create_rejects_duplicate_name() {
        let mut system = AddressBookSystem::new();
        system.create_address_book("Personal").unwrap();

        let err = system.create_address_book("Personal").unwrap_err();
        assert_eq!(err, AddressBookError::DuplicateName("Personal".to_string()));
        assert_eq!(system.book_names(), vec!["Personal"]);
    }

    #[test]
    fn test_get_missing_book_is_none() {
        let system = AddressBookSystem::new();
        assert!(system.get_address_book("Personal").is_none());
    }

    #[test]
    fn test_remove_address_book() {
        let mut system = AddressBookSystem::new();
        system.create_address_book("Personal").unwrap();
        system.create_address_book("Work").unwrap();

        let removed = system.remove_address_book("Personal").unwrap();
        assert_eq!(removed.name(), "Personal");
        assert_eq!(system.book_names(), vec!["Work"]);
        assert!(matches!(
            system.remove_address_book("Personal"),
            Err(AddressBookError::NotFound(_))
        ));
    }

    #[test]
    fn test_search_across_books() {
        let mut system = AddressBookSystem::new();
        system
            .create_address_book("Personal")
            .unwrap()
            .add_contact(contact("John", "Boston"))
            .unwrap();
        let work = system.create_address_book("Work").unwrap();
        work.add_contact(contact("Jane", "boston")).unwrap();
        work.add_contact(contact("Amy", "Austin")).unwrap();

        let found: Vec<(&str, &str)> = system
            .search_by_city("BOSTON")
            .into_iter()
            .map(|(book, c)| (book, c.first_name()))
            .collect();
        assert_eq!(found, vec![("Personal", "John"), ("Work", "Jane")]);
        assert_eq!(system.count_by_city("boston"), 2);
        assert_eq!(system.count_by_state("newyork"), 3);
        assert_eq!(system.search_by_state("Texas").len(), 0);
    }
}
