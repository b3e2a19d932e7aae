use serde_json::Value;

use crate::api::TransportError;

/// Fallback detail when the server's error body carries no explanation.
const UNKNOWN_ERROR: &str = "Unknown error";

/// Why a submission attempt failed.
///
/// The `Display` output is the text shown in the error banner.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The server answered with a non-2xx status and a JSON body.
    #[error("Server responded with status {status}: {detail}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// The body's `detail` or `message`, or a generic fallback.
        detail: String,
    },

    /// No usable response was received.
    #[error("Error: {0}. Please try again.")]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Builds a [`SubmitError::Server`] from a failed response.
    ///
    /// Prefers a non-empty `detail` string, then a non-empty `message` string.
    pub fn from_response(status: u16, body: &Value) -> Self {
        let detail = ["detail", "message"]
            .into_iter()
            .find_map(|key| body.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()))
            .unwrap_or(UNKNOWN_ERROR)
            .to_string();
        Self::Server { status, detail }
    }
}
