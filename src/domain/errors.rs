//! Domain validation errors.

use super::field::ContactField;
use std::fmt;

/// A contact field value that failed its validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that was rejected.
    pub field: ContactField,

    /// Description of the violated rule.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error for `field`.
    pub fn new(field: ContactField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
