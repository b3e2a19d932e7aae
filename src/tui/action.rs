//! Actions returned by screen event handlers.

use crate::model::ContactPayload;

/// An action that a screen handler returns to the [`App`](super::App).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Send the validated payload to the contact endpoint.
    Submit(ContactPayload),
}
