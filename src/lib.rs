//! Address Book - validated contacts in named, in-memory address books.
//!
//! # Architecture
//!
//! - **domain**: Field identifiers and the validation rule for each field
//! - **models**: Contact, AddressBook and AddressBookSystem
//! - **matching**: Fuzzy contact search
//! - **services**: Lock-guarded async access to a shared system
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod services;

pub use config::Config;
pub use domain::{ContactField, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError, ErrorKind, MatchingError};
pub use matching::{ContactMatcher, ContactQuery, MatchResult, MatchType};
pub use models::{AddressBook, AddressBookSystem, Contact, ContactDetails, ContactPatch, SortKey};
pub use services::{AddressBookService, AddressBookServiceImpl};
