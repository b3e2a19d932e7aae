use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Url};
use serde_json::Value;

use super::error::TransportError;
use crate::model::ContactPayload;

/// A pending submission, owned so it can outlive the call that started it.
pub type SubmitFuture = BoxFuture<'static, Result<ApiResponse, TransportError>>;

/// Status and parsed JSON body of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// Returns `true` for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can deliver a contact payload and hand back the reply.
///
/// Implementations make exactly one attempt. Non-2xx replies are still
/// `Ok`; only failures to obtain a JSON reply are `Err`.
pub trait ContactApi {
    /// Sends `payload` and resolves once the reply body has been parsed.
    fn submit(&self, payload: ContactPayload) -> SubmitFuture;
}

/// [`ContactApi`] backed by a single HTTP POST.
#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: Client,
    endpoint: Url,
}

impl HttpContactApi {
    /// Creates a client that posts to `endpoint`.
    ///
    /// Cookies set by the endpoint are kept and sent back on later requests.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().cookie_store(true).build()?;
        tracing::info!(%endpoint, "contact client ready");
        Ok(Self { client, endpoint })
    }

    /// The URL submissions are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactApi for HttpContactApi {
    fn submit(&self, payload: ContactPayload) -> SubmitFuture {
        // `json` sets `Content-Type: application/json`.
        let request = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(&payload);
        let endpoint = self.endpoint.clone();

        async move {
            tracing::debug!(%endpoint, "posting contact form");
            let response = request.send().await?;
            let status = response.status().as_u16();
            let bytes = response.bytes().await?;
            let body: Value = serde_json::from_slice(&bytes)?;
            tracing::debug!(status, %body, "contact endpoint replied");
            Ok(ApiResponse { status, body })
        }
        .boxed()
    }
}
