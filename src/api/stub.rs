//! In-memory [`ContactApi`] for unit tests.

use std::sync::Mutex;

use futures::FutureExt;
use serde_json::Value;

use super::{ApiResponse, ContactApi, SubmitFuture, TransportError};
use crate::model::ContactPayload;

type Responder = Box<dyn Fn() -> Result<ApiResponse, TransportError> + Send + Sync>;

/// Replies immediately with a canned outcome and records every payload.
pub(crate) struct StubApi {
    respond: Responder,
    sent: Mutex<Vec<ContactPayload>>,
}

impl StubApi {
    pub(crate) fn replying(status: u16, body: Value) -> Self {
        Self::with(move || {
            Ok(ApiResponse {
                status,
                body: body.clone(),
            })
        })
    }

    pub(crate) fn failing_with_invalid_body() -> Self {
        Self::with(|| Err(invalid_body_error()))
    }

    pub(crate) fn failing_before_response() -> Self {
        Self::with(|| Err(request_error()))
    }

    fn with(respond: impl Fn() -> Result<ApiResponse, TransportError> + Send + Sync + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            sent: Mutex::default(),
        }
    }

    pub(crate) fn sent(&self) -> Vec<ContactPayload> {
        self.sent.lock().unwrap().clone()
    }
}

impl ContactApi for StubApi {
    fn submit(&self, payload: ContactPayload) -> SubmitFuture {
        self.sent.lock().unwrap().push(payload);
        futures::future::ready((self.respond)()).boxed()
    }
}

/// A transport error as produced when the server returns HTML instead of JSON.
pub(crate) fn invalid_body_error() -> TransportError {
    let err = serde_json::from_str::<Value>("<html>502 Bad Gateway</html>").unwrap_err();
    TransportError::InvalidBody(err)
}

/// A transport error raised by the HTTP client before anything is sent.
pub(crate) fn request_error() -> TransportError {
    let err = reqwest::Client::new()
        .post("not a url")
        .build()
        .unwrap_err();
    TransportError::Http(err)
}
