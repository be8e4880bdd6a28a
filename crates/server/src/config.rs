//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HARBORLANE_HOST` - Bind address (default: 127.0.0.1)
//! - `HARBORLANE_PORT` - Listen port (default: 4000)
//! - `CATALOG_API_URL` - Remote catalog endpoint (default: production endpoint)
//! - `CATALOG_API_KEY` - Static key for the catalog API. May be unset: the
//!   gateway then reports a configuration error per fetch instead of the
//!   server refusing to boot, so the surface still renders with a message.

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default remote catalog endpoint.
pub const DEFAULT_CATALOG_API_URL: &str = "https://api.harborlane.dev/v1/catalog/query";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Remote catalog endpoint URL.
    pub catalog_api_url: String,
    /// Static catalog API key; absence is a per-fetch error, not a boot error.
    pub catalog_api_key: Option<SecretString>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("catalog_api_url", &self.catalog_api_url)
            .field(
                "catalog_api_key",
                &self.catalog_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HARBORLANE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HARBORLANE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("HARBORLANE_PORT", "4000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("HARBORLANE_PORT".to_string(), e.to_string()))?;

        let catalog_api_url = get_env_or_default("CATALOG_API_URL", DEFAULT_CATALOG_API_URL);
        Url::parse(&catalog_api_url).map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOG_API_URL".to_string(), e.to_string())
        })?;

        let catalog_api_key = get_optional_env("CATALOG_API_KEY").map(SecretString::from);

        Ok(Self {
            host,
            port,
            catalog_api_url,
            catalog_api_key,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 4000,
            catalog_api_url: DEFAULT_CATALOG_API_URL.to_string(),
            catalog_api_key: Some(SecretString::from("k-3x9mpl3-r4nd0m")),
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 4000);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = test_config();
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("k-3x9mpl3-r4nd0m"));
    }

    #[test]
    fn test_default_endpoint_is_a_valid_url() {
        assert!(Url::parse(DEFAULT_CATALOG_API_URL).is_ok());
    }
}
