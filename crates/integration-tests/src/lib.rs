//! Integration tests for Harborlane.
//!
//! Shared test support: a recording catalog transport and config builders.
//! The tests themselves live under `tests/`:
//!
//! - `server_routes` - Router behavior via `tower::ServiceExt::oneshot`
//! - `reconciliation` - Cross-crate surface reconciliation scenarios

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::Value;

use harborlane_server::config::{DEFAULT_CATALOG_API_URL, ServerConfig};
use harborlane_server::gateway::{CatalogTransport, RawResponse, TransportError};

/// Server config pointing at nothing real; tests inject a transport.
#[must_use]
pub fn test_config(api_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().expect("valid ip"),
        port: 0,
        catalog_api_url: DEFAULT_CATALOG_API_URL.to_string(),
        catalog_api_key: api_key.map(SecretString::from),
    }
}

/// Catalog transport fake: counts calls and replays a canned response.
pub struct RecordingTransport {
    calls: AtomicUsize,
    last_body: Mutex<Option<Value>>,
    response: Result<(u16, String), String>,
}

impl RecordingTransport {
    #[must_use]
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_body: Mutex::new(None),
            response: Ok((status, body.to_string())),
        }
    }

    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_body: Mutex::new(None),
            response: Err(message.to_string()),
        }
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The body sent with the most recent call, if any.
    #[must_use]
    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().expect("lock").clone()
    }
}

#[async_trait]
impl CatalogTransport for RecordingTransport {
    async fn send(
        &self,
        _endpoint: &str,
        _api_key: &SecretString,
        body: &Value,
    ) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_body.lock().expect("lock") = Some(body.clone());
        match &self.response {
            Ok((status, body)) => Ok(RawResponse {
                status: *status,
                body: body.clone(),
            }),
            Err(message) => Err(TransportError(message.clone())),
        }
    }
}
