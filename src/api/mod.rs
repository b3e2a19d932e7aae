//! Submission transport: the [`ContactApi`] capability and its HTTP implementation.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod stub;

pub use client::{ApiResponse, ContactApi, HttpContactApi, SubmitFuture};
pub use error::TransportError;
