mod field;
mod validation;

pub use field::{ContactFields, ContactPayload, Field};
pub use validation::{FieldErrors, ValidationError, validate, validate_email, validate_field};
