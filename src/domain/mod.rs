//! Domain validation for contact fields.
//!
//! This module names the fields a contact carries and holds the rule each
//! one must satisfy. Contacts are only ever built or patched through these
//! rules, so invalid data cannot be represented in an address book.

pub mod errors;
pub mod field;
pub mod rules;

pub use errors::ValidationError;
pub use field::ContactField;
pub use rules::validate_field;
