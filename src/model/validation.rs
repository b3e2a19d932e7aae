use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::{ContactFields, Field};

/// Reasons a single field fails validation.
///
/// The `Display` output is the message rendered beneath the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

/// Per-field validation failures, keyed in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    /// Returns `true` when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the error recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Records an error for `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    /// Drops the error for `field`. Returns the removed error, if there was one.
    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    /// Iterates over `(field, error)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(&f, e)| (f, e))
    }
}

/// Checks that `value` is present once surrounding whitespace is removed.
fn require(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Validates an email address: required first, then `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    require(Field::Email, email)?;
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates a single field's value.
///
/// Phone numbers are only checked for presence; any format is accepted.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Email => validate_email(value),
        Field::Name | Field::Phone | Field::Message => require(field, value),
    }
}

/// Validates every field and collects all failures.
///
/// Rules are independent; an empty result means the form may be submitted.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if let Err(e) = validate_field(field, fields.get(field)) {
            errors.insert(field, e);
        }
    }
    errors
}
