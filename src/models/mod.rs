//! Data models for contacts and address books.
//!
//! This module contains the validated contact record, the address book that
//! owns a set of unique contacts, and the system that owns named books.

pub mod address_book;
pub mod contact;
pub mod system;

pub use address_book::{AddressBook, SortKey};
pub use contact::{Contact, ContactDetails, ContactPatch};
pub use system::AddressBookSystem;
