//! Catalog gateway: single-attempt remote fetch plus shape normalization.
//!
//! The gateway is the only component that talks to the remote catalog API.
//! It never raises past its boundary: every failure mode - missing
//! credential, transport error, non-success status, unparseable body -
//! becomes a structured [`CatalogResult`] with `error` set. One call, one
//! attempt; no retry, no cache, no timeout beyond transport defaults.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use tracing::{debug, instrument};

use harborlane_core::types::{CatalogItem, CatalogResult};

use crate::config::ServerConfig;

/// Header carrying the static catalog API key.
pub const API_KEY_HEADER: &str = "X-Catalog-Key";

/// Fixed request body fields sent with every fetch.
const OPERATION: &str = "catalog.list";
const CATALOG_ID: &str = "harborlane-services";
const CATALOG_KIND: &str = "services";

/// Transport-level failure (connection refused, DNS, body read, ...).
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// Raw response handed back by a transport: status plus unparsed body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Seam between the gateway and the wire.
///
/// Production uses [`HttpTransport`]; tests inject a recording fake so the
/// "no credential means no network call" contract is observable.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// POST `body` to `endpoint` with the API key header attached.
    async fn send(
        &self,
        endpoint: &str,
        api_key: &SecretString,
        body: &Value,
    ) -> Result<RawResponse, TransportError>;
}

/// Production transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogTransport for HttpTransport {
    async fn send(
        &self,
        endpoint: &str,
        api_key: &SecretString,
        body: &Value,
    ) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .post(endpoint)
            .header(API_KEY_HEADER, api_key.expose_secret())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

/// Client for the remote catalog API.
///
/// Holds no mutable state between calls; safe to share and call concurrently.
#[derive(Clone)]
pub struct CatalogGateway {
    transport: Arc<dyn CatalogTransport>,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl CatalogGateway {
    /// Create a gateway using the production HTTP transport.
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Create a gateway with an injected transport (used by tests).
    #[must_use]
    pub fn with_transport(config: &ServerConfig, transport: Arc<dyn CatalogTransport>) -> Self {
        Self {
            transport,
            endpoint: config.catalog_api_url.clone(),
            api_key: config.catalog_api_key.clone(),
        }
    }

    /// Fetch the catalog once.
    ///
    /// Never returns an error: failures are reported inside the result. With
    /// no configured credential the transport is not touched at all.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> CatalogResult {
        let Some(api_key) = &self.api_key else {
            return CatalogResult::failed(
                "CATALOG_API_KEY is not configured; catalog retrieval is disabled",
            );
        };

        let body = request_body();
        let response = match self.transport.send(&self.endpoint, api_key, &body).await {
            Ok(response) => response,
            Err(err) => {
                return CatalogResult::failed(format!("Catalog request failed: {err}"));
            }
        };

        if !(200..300).contains(&response.status) {
            return CatalogResult::failed(format!(
                "Catalog service returned HTTP {}",
                response.status
            ));
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => {
                let catalog = normalize_catalog(&value);
                debug!(items = catalog.len(), "catalog fetch succeeded");
                CatalogResult::ok(catalog)
            }
            Err(err) => CatalogResult::failed(format!("Catalog response was not JSON: {err}")),
        }
    }
}

/// The fixed JSON body sent with every catalog request.
fn request_body() -> Value {
    json!({
        "operation": OPERATION,
        "catalog_id": CATALOG_ID,
        "kind": CATALOG_KIND,
    })
}

/// Normalize the three accepted response shapes into one item list.
///
/// Discriminators are checked in priority order: a bare array, then an
/// object's `catalog` array, then its `data` array. Any other shape (or a
/// discriminator holding a non-array) normalizes to an empty list rather
/// than an error.
fn normalize_catalog(value: &Value) -> Vec<CatalogItem> {
    let entries = if value.is_array() {
        Some(value)
    } else if let Some(catalog) = value.get("catalog") {
        Some(catalog)
    } else {
        value.get("data")
    };

    entries
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
