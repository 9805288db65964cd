//! Field validation rules.
//!
//! Every contact field has exactly one rule, expressed as an anchored regex.
//! Construction and updates both go through [`validate_field`], so a stored
//! contact always satisfies the table below.
//!
//! | field                | rule                                                   |
//! |----------------------|--------------------------------------------------------|
//! | firstName / lastName | uppercase ASCII letter followed by 2+ ASCII letters    |
//! | address / city       | any characters, at least 4                             |
//! | state                | ASCII letters only, at least 4                         |
//! | zip                  | ASCII digits only, 5 or 6                              |
//! | phone                | ASCII digits only, exactly 10                          |
//! | email                | `local@domain.tld`, no whitespace or `@` in the parts, |
//! |                      | TLD of 2+ letters                                      |

use super::errors::ValidationError;
use super::field::ContactField;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z]{2,}$").expect("Failed to compile name regex"));

static LOCALITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.{4,}$").expect("Failed to compile locality regex"));

static STATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{4,}$").expect("Failed to compile state regex"));

static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5,6}$").expect("Failed to compile zip regex"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").expect("Failed to compile email regex")
});

/// Check `value` against the rule for `field`.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming `field` and the violated rule.
pub fn validate_field(field: ContactField, value: &str) -> Result<(), ValidationError> {
    let (regex, rule): (&Regex, &str) = match field {
        ContactField::FirstName | ContactField::LastName => (
            &*NAME_REGEX,
            "must start with an uppercase letter followed by at least 2 letters",
        ),
        ContactField::Address | ContactField::City => {
            (&*LOCALITY_REGEX, "must be at least 4 characters long")
        }
        ContactField::State => (&*STATE_REGEX, "must be at least 4 letters with no digits"),
        ContactField::Zip => (&*ZIP_REGEX, "must be 5 or 6 digits"),
        ContactField::Phone => (&*PHONE_REGEX, "must be exactly 10 digits"),
        ContactField::Email => (&*EMAIL_REGEX, "must look like local@domain.tld"),
    };

    if regex.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, rule))
    }
}
