//! Local catalog fetch behind a trait seam.
//!
//! The standalone fallback path: the surface fetches the same data the tool
//! invocation would have carried, through the server's local retrieval
//! endpoint. Mirrors the gateway's boundary rule - failures become a
//! `CatalogResult` with `error` set, never a raised error.

use async_trait::async_trait;
use tracing::instrument;

use harborlane_core::CatalogResult;

/// Where the controller's fallback fetch gets its data.
///
/// Production uses [`EndpointSource`]; tests inject fakes to script the
/// race between the two producers.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the catalog once. Never raises; failures are in the result.
    async fn fetch(&self) -> CatalogResult;
}

/// Fetches from the server's local retrieval endpoint.
pub struct EndpointSource {
    client: reqwest::Client,
    url: String,
}

impl EndpointSource {
    /// Create a source posting to `url` (e.g. `http://127.0.0.1:4000/api/catalog`).
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for EndpointSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> CatalogResult {
        let response = match self.client.post(&self.url).send().await {
            Ok(response) => response,
            Err(err) => {
                return CatalogResult::failed(format!("Local catalog request failed: {err}"));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                return CatalogResult::failed(format!("Local catalog response unreadable: {err}"));
            }
        };

        // The endpoint speaks CatalogResult natively: `{ catalog }` on
        // success, `{ error }` with a server-error status on failure.
        match serde_json::from_str::<CatalogResult>(&body) {
            Ok(result) if result.is_failed() => result,
            Ok(_) if !status.is_success() => {
                CatalogResult::failed(format!("Local catalog endpoint returned HTTP {status}"))
            }
            Ok(result) => result,
            Err(err) => CatalogResult::failed(format!("Local catalog response was not JSON: {err}")),
        }
    }
}
