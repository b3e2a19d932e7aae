/// Failures that happen before a usable response is in hand.
///
/// Anything that prevents reading a JSON body: connection refused, TLS or DNS
/// failure, an interrupted transfer, or a body that is not JSON.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client failed to send the request or read the response.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be parsed as JSON.
    #[error("response body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}
