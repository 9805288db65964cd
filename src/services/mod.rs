//! Application service layer.
//!
//! Services wrap the in-memory models behind a lock so they can be shared
//! between concurrent callers.

mod address_book_service;

pub use address_book_service::{AddressBookService, AddressBookServiceImpl};
