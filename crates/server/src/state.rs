//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::gateway::{CatalogGateway, CatalogTransport};
use crate::tool::CatalogTool;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    gateway: CatalogGateway,
    tool: CatalogTool,
}

impl AppState {
    /// Create state backed by the production HTTP transport.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let gateway = CatalogGateway::new(&config);
        Self::from_parts(config, gateway)
    }

    /// Create state with an injected catalog transport (used by tests).
    #[must_use]
    pub fn with_transport(config: ServerConfig, transport: Arc<dyn CatalogTransport>) -> Self {
        let gateway = CatalogGateway::with_transport(&config, transport);
        Self::from_parts(config, gateway)
    }

    fn from_parts(config: ServerConfig, gateway: CatalogGateway) -> Self {
        let tool = CatalogTool::new(gateway.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                gateway,
                tool,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog gateway.
    #[must_use]
    pub fn gateway(&self) -> &CatalogGateway {
        &self.inner.gateway
    }

    /// Get a reference to the invocable catalog operation.
    #[must_use]
    pub fn tool(&self) -> &CatalogTool {
        &self.inner.tool
    }
}
