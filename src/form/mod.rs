//! The contact form's state: field values, validation errors, and the
//! submission lifecycle.
//!
//! [`ContactForm`] is independent of any UI. A front end forwards edits to
//! [`ContactForm::on_change`], calls [`ContactForm::begin_submit`] to obtain a
//! payload, hands that payload to a [`ContactApi`](crate::api::ContactApi),
//! and reports the outcome through [`ContactForm::finish`].

mod contact;
mod error;

pub use contact::{ContactForm, PREVIEW_CHARS, SubmissionState, response_preview};
pub use error::SubmitError;
