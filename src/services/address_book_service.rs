//! Address book service layer.
//!
//! Shares one [`AddressBookSystem`] between concurrent callers. All access
//! goes through a single `RwLock`, so each operation sees and leaves the
//! system in a consistent state.

use crate::config::Config;
use crate::error::{AddressBookError, AddressBookResult};
use crate::matching::ContactQuery;
use crate::models::{AddressBook, AddressBookSystem, Contact, ContactDetails, ContactPatch, SortKey};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Address book service trait for business operations.
///
/// Books are addressed by name. Operations on a missing book fail with
/// `AddressBookError::NotFound`, except [`get_address_book`] which returns
/// `None`.
///
/// [`get_address_book`]: AddressBookService::get_address_book
#[async_trait]
pub trait AddressBookService: Send + Sync {
    /// Create an empty address book.
    async fn create_address_book(&self, name: &str) -> AddressBookResult<()>;

    /// Snapshot of a book, if it exists.
    async fn get_address_book(&self, name: &str) -> Option<AddressBook>;

    /// Remove a book and return its final state.
    async fn remove_address_book(&self, name: &str) -> AddressBookResult<AddressBook>;

    /// Names of all books in creation order.
    async fn book_names(&self) -> Vec<String>;

    /// Validate `details` and add the resulting contact to `book`.
    async fn add_contact(&self, book: &str, details: ContactDetails) -> AddressBookResult<Contact>;

    /// Remove the first contact in `book` matching `name`.
    async fn remove_contact(&self, book: &str, name: &str) -> AddressBookResult<Contact>;

    /// Patch the first contact in `book` matching `name`.
    async fn update_contact(
        &self,
        book: &str,
        name: &str,
        patch: ContactPatch,
    ) -> AddressBookResult<Contact>;

    /// First contact in `book` matching `name`.
    async fn find_contact(&self, book: &str, name: &str) -> AddressBookResult<Option<Contact>>;

    /// All contacts of `book` in current order.
    async fn list_contacts(&self, book: &str) -> AddressBookResult<Vec<Contact>>;

    /// Sort `book` in place by `key`.
    async fn sort_contacts(&self, book: &str, key: SortKey) -> AddressBookResult<()>;

    /// Contacts in `city` across all books, paired with their book name.
    async fn search_by_city(&self, city: &str) -> Vec<(String, Contact)>;

    /// Contacts in `state` across all books, paired with their book name.
    async fn search_by_state(&self, state: &str) -> Vec<(String, Contact)>;

    /// Fuzzy search within `book` using the configured limits.
    async fn search(&self, book: &str, query: ContactQuery) -> AddressBookResult<Vec<Contact>>;

    /// Copy of the whole system.
    async fn snapshot(&self) -> AddressBookSystem;
}

/// Default in-memory implementation of AddressBookService.
#[derive(Clone)]
pub struct AddressBookServiceImpl {
    system: Arc<RwLock<AddressBookSystem>>,
    max_match_results: usize,
    match_confidence_threshold: u8,
}

impl AddressBookServiceImpl {
    /// Create a new service over an empty system.
    pub fn new(config: &Config) -> Self {
        Self::with_system(AddressBookSystem::new(), config)
    }

    /// Create a new service over an existing system.
    pub fn with_system(system: AddressBookSystem, config: &Config) -> Self {
        Self {
            system: Arc::new(RwLock::new(system)),
            max_match_results: config.max_match_results,
            match_confidence_threshold: config.match_confidence_threshold,
        }
    }

    fn book_not_found(name: &str) -> AddressBookError {
        AddressBookError::NotFound(format!("no address book named '{}'", name))
    }

    async fn with_book<T>(
        &self,
        name: &str,
        f: impl FnOnce(&AddressBook) -> AddressBookResult<T> + Send,
    ) -> AddressBookResult<T> {
        let system = self.system.read().await;
        let book = system
            .get_address_book(name)
            .ok_or_else(|| Self::book_not_found(name))?;
        f(book)
    }

    async fn with_book_mut<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut AddressBook) -> AddressBookResult<T> + Send,
    ) -> AddressBookResult<T> {
        let mut system = self.system.write().await;
        let book = system
            .get_address_book_mut(name)
            .ok_or_else(|| Self::book_not_found(name))?;
        f(book)
    }
}

fn owned_pairs(pairs: Vec<(&str, &Contact)>) -> Vec<(String, Contact)> {
    pairs
        .into_iter()
        .map(|(book, contact)| (book.to_string(), contact.clone()))
        .collect()
}

#[async_trait]
impl AddressBookService for AddressBookServiceImpl {
    async fn create_address_book(&self, name: &str) -> AddressBookResult<()> {
        let mut system = self.system.write().await;
        system.create_address_book(name)?;
        Ok(())
    }

    async fn get_address_book(&self, name: &str) -> Option<AddressBook> {
        let system = self.system.read().await;
        system.get_address_book(name).cloned()
    }

    async fn remove_address_book(&self, name: &str) -> AddressBookResult<AddressBook> {
        let mut system = self.system.write().await;
        system.remove_address_book(name)
    }

    async fn book_names(&self) -> Vec<String> {
        let system = self.system.read().await;
        system.book_names().into_iter().map(String::from).collect()
    }

    async fn add_contact(&self, book: &str, details: ContactDetails) -> AddressBookResult<Contact> {
        let contact = Contact::new(details)?;
        self.with_book_mut(book, |b| {
            b.add_contact(contact.clone())?;
            Ok(contact)
        })
        .await
    }

    async fn remove_contact(&self, book: &str, name: &str) -> AddressBookResult<Contact> {
        self.with_book_mut(book, |b| b.remove_contact(name)).await
    }

    async fn update_contact(
        &self,
        book: &str,
        name: &str,
        patch: ContactPatch,
    ) -> AddressBookResult<Contact> {
        self.with_book_mut(book, |b| b.update_by_name(name, &patch).cloned())
            .await
    }

    async fn find_contact(&self, book: &str, name: &str) -> AddressBookResult<Option<Contact>> {
        self.with_book(book, |b| Ok(b.find_by_name(name).cloned()))
            .await
    }

    async fn list_contacts(&self, book: &str) -> AddressBookResult<Vec<Contact>> {
        self.with_book(book, |b| Ok(b.list())).await
    }

    async fn sort_contacts(&self, book: &str, key: SortKey) -> AddressBookResult<()> {
        self.with_book_mut(book, |b| {
            b.sort_by(key);
            Ok(())
        })
        .await
    }

    async fn search_by_city(&self, city: &str) -> Vec<(String, Contact)> {
        let system = self.system.read().await;
        owned_pairs(system.search_by_city(city))
    }

    async fn search_by_state(&self, state: &str) -> Vec<(String, Contact)> {
        let system = self.system.read().await;
        owned_pairs(system.search_by_state(state))
    }

    async fn search(&self, book: &str, query: ContactQuery) -> AddressBookResult<Vec<Contact>> {
        debug!(book, ?query, "Searching contacts");
        let (max, min) = (self.max_match_results, self.match_confidence_threshold);
        self.with_book(book, |b| {
            let matches = b.search(&query, max, min)?;
            Ok(matches.into_iter().map(|m| m.contact.clone()).collect())
        })
        .await
    }

    async fn snapshot(&self) -> AddressBookSystem {
        self.system.read().await.clone()
    }
}
