//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when operating on address books.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A contact field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A contact with the same first and last name already exists
    #[error("Contact already exists: {first_name} {last_name}")]
    DuplicateContact {
        first_name: String,
        last_name: String,
    },

    /// An address book with the same name already exists
    #[error("Address book already exists: {0}")]
    DuplicateName(String),

    /// No contact or address book matched
    #[error("Not found: {0}")]
    NotFound(String),

    /// A search query was rejected
    #[error(transparent)]
    Matching(#[from] MatchingError),
}

/// Stable classification of an [`AddressBookError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    DuplicateContact,
    DuplicateName,
    NotFound,
    InvalidQuery,
}

impl AddressBookError {
    /// The kind of this error, for structured reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateContact { .. } => ErrorKind::DuplicateContact,
            Self::DuplicateName(_) => ErrorKind::DuplicateName,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Matching(_) => ErrorKind::InvalidQuery,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur during fuzzy matching operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// Invalid search query
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with MatchingError
pub type MatchingResult<T> = Result<T, MatchingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactField;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::NotFound("contact 'Jane'".to_string());
        assert_eq!(err.to_string(), "Not found: contact 'Jane'");

        let err = AddressBookError::DuplicateName("Personal".to_string());
        assert_eq!(err.to_string(), "Address book already exists: Personal");

        let err = AddressBookError::DuplicateContact {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        };
        assert_eq!(err.to_string(), "Contact already exists: John Doe");

        let err = MatchingError::InvalidQuery("empty".to_string());
        assert_eq!(err.to_string(), "Invalid search query: empty");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: AddressBookError =
            ValidationError::new(ContactField::Email, "must look like local@domain.tld").into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.to_string(),
            "Invalid email: must look like local@domain.tld"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            AddressBookError::NotFound(String::new()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            AddressBookError::DuplicateName(String::new()).kind(),
            ErrorKind::DuplicateName
        );
        let json = serde_json::to_string(&ErrorKind::DuplicateContact).unwrap();
        assert_eq!(json, "\"duplicate_contact\"");
    }
}
