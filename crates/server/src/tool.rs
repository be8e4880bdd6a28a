//! Invocable catalog operation exposed to the hosting runtime.
//!
//! One operation, one optional free-text argument. Each invocation fetches
//! the catalog, filters it, and returns a fresh [`InvocationResult`] plus a
//! human-readable summary; nothing is mutated outside the return value, so
//! the operation is referentially transparent for a stable gateway response.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::instrument;

use harborlane_core::InvocationResult;
use harborlane_core::filter::filter_catalog;

use crate::gateway::CatalogGateway;

/// Brand name carried in every invocation payload.
pub const SERVICE_NAME: &str = "Harborlane";

/// Name of the invocable operation.
pub const TOOL_NAME: &str = "browse_services";

/// Reference to the visual template the host renders the payload with.
pub const TEMPLATE_URI: &str = "ui://widget/harborlane-catalog.html";

/// Status line shown by the host while the operation runs.
pub const INVOKING_STATUS: &str = "Browsing the Harborlane catalog...";

/// Status line shown by the host once the operation completes.
pub const INVOKED_STATUS: &str = "Fetched the Harborlane catalog";

/// Static description of the invocable operation for host registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    pub template: &'static str,
    pub invoking: &'static str,
    pub invoked: &'static str,
}

/// The descriptor for the catalog browsing tool.
#[must_use]
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME,
        description: "Browse the Harborlane service catalog, optionally filtered by a free-text query over service, variant, and category names.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Optional free-text filter, e.g. \"cleaning\" or \"san francisco\"."
                }
            },
            "required": [],
        }),
        template: TEMPLATE_URI,
        invoking: INVOKING_STATUS,
        invoked: INVOKED_STATUS,
    }
}

/// The invocable catalog operation.
#[derive(Clone)]
pub struct CatalogTool {
    gateway: CatalogGateway,
}

impl CatalogTool {
    #[must_use]
    pub const fn new(gateway: CatalogGateway) -> Self {
        Self { gateway }
    }

    /// Run one invocation with an optional query argument.
    ///
    /// A gateway error short-circuits: the error passes through verbatim
    /// alongside an explanatory message and no filtering is attempted. A
    /// query that matches nothing against a non-empty catalog falls back to
    /// the full set with a note, by explicit product policy.
    #[instrument(skip(self))]
    pub async fn invoke(&self, query: Option<&str>) -> InvocationResult {
        let fetched = self.gateway.fetch().await;
        let query_echo = query.map(str::to_string);

        if let Some(error) = fetched.error {
            return InvocationResult {
                service_name: SERVICE_NAME.to_string(),
                query: query_echo,
                catalog: Vec::new(),
                count: None,
                message: Some(format!("The service catalog could not be retrieved: {error}")),
                error: Some(error),
            };
        }

        let filtered = filter_catalog(&fetched.catalog, query);

        if filtered.is_empty() && !fetched.catalog.is_empty() {
            let q = query.unwrap_or_default().trim().to_string();
            let count = fetched.catalog.len();
            return InvocationResult {
                service_name: SERVICE_NAME.to_string(),
                query: query_echo,
                catalog: fetched.catalog,
                count: Some(count),
                message: Some(format!(
                    "No exact matches for \"{q}\" - showing all services."
                )),
                error: None,
            };
        }

        let count = filtered.len();
        InvocationResult {
            service_name: SERVICE_NAME.to_string(),
            query: query_echo,
            catalog: filtered,
            count: Some(count),
            message: None,
            error: None,
        }
    }
}

/// Human-readable summary accompanying an invocation result.
///
/// Non-error summaries state the returned count and echo the query when one
/// was supplied. The no-match wording here intentionally differs from the
/// payload's `message` text; both strings are part of the observable
/// behavior at their respective call sites.
#[must_use]
pub fn summarize(result: &InvocationResult) -> String {
    if let Some(error) = &result.error {
        return format!("The service catalog could not be retrieved: {error}");
    }

    let count = result.count.unwrap_or(result.catalog.len());
    match (&result.query, &result.message) {
        (Some(query), Some(_)) => format!(
            "No services matched \"{query}\". Returning the full catalog of {count} services."
        ),
        (Some(query), None) => format!("Found {count} services matching \"{query}\"."),
        _ => format!("Found {count} services."),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use secrecy::SecretString;

    use crate::config::ServerConfig;
    use crate::gateway::{CatalogTransport, RawResponse, TransportError};

    use super::*;

    struct CannedTransport {
        status: u16,
        body: String,
    }

    #[async_trait]
    impl CatalogTransport for CannedTransport {
        async fn send(
            &self,
            _endpoint: &str,
            _api_key: &SecretString,
            _body: &Value,
        ) -> Result<RawResponse, TransportError> {
            Ok(RawResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    fn tool_with_response(status: u16, body: &str) -> CatalogTool {
        let config = ServerConfig {
            host: "127.0.0.1".parse().expect("valid ip"),
            port: 4000,
            catalog_api_url: crate::config::DEFAULT_CATALOG_API_URL.to_string(),
            catalog_api_key: Some(SecretString::from("test-key")),
        };
        let transport = Arc::new(CannedTransport {
            status,
            body: body.to_string(),
        });
        CatalogTool::new(CatalogGateway::with_transport(&config, transport))
    }

    const ITEMS: &str = r#"{"catalog": [
        {"id": 1, "service": "Deep Home Cleaning", "variant": "San Francisco", "category": "cleaning"},
        {"id": 2, "service": "Handyman Visit", "variant": "Seattle", "category": "repairs"}
    ]}"#;

    #[tokio::test]
    async fn test_invoke_without_query_returns_all() {
        let tool = tool_with_response(200, ITEMS);
        let result = tool.invoke(None).await;

        assert_eq!(result.service_name, SERVICE_NAME);
        assert_eq!(result.catalog.len(), 2);
        assert_eq!(result.count, Some(2));
        assert!(result.query.is_none());
        assert!(result.message.is_none());
        assert!(result.error.is_none());
        assert_eq!(summarize(&result), "Found 2 services.");
    }

    #[tokio::test]
    async fn test_invoke_with_matching_query_filters() {
        let tool = tool_with_response(200, ITEMS);
        let result = tool.invoke(Some("cleaning")).await;

        assert_eq!(result.catalog.len(), 1);
        assert_eq!(result.catalog[0].id, 1);
        assert_eq!(result.count, Some(1));
        assert_eq!(result.query.as_deref(), Some("cleaning"));
        assert!(result.message.is_none());
        assert_eq!(summarize(&result), "Found 1 services matching \"cleaning\".");
    }

    #[tokio::test]
    async fn test_no_match_falls_back_to_full_catalog_with_note() {
        let tool = tool_with_response(200, ITEMS);
        let result = tool.invoke(Some("atlantis")).await;

        assert_eq!(result.catalog.len(), 2, "full set comes back");
        assert_eq!(result.count, Some(2));
        assert_eq!(
            result.message.as_deref(),
            Some("No exact matches for \"atlantis\" - showing all services.")
        );
        assert!(result.error.is_none());
        // The summary wording differs from the payload message on purpose.
        assert_eq!(
            summarize(&result),
            "No services matched \"atlantis\". Returning the full catalog of 2 services."
        );
    }

    #[tokio::test]
    async fn test_gateway_error_short_circuits_filtering() {
        let tool = tool_with_response(500, "boom");
        let result = tool.invoke(Some("cleaning")).await;

        assert!(result.catalog.is_empty());
        assert!(result.count.is_none());
        let error = result.error.as_deref().expect("error present");
        assert!(error.contains("500"));
        assert!(
            result
                .message
                .as_deref()
                .is_some_and(|m| m.contains(error)),
            "message wraps the verbatim gateway error"
        );
    }

    #[tokio::test]
    async fn test_empty_catalog_with_query_stays_empty() {
        let tool = tool_with_response(200, r#"{"catalog": []}"#);
        let result = tool.invoke(Some("cleaning")).await;

        // No fallback when there is nothing to fall back to.
        assert!(result.catalog.is_empty());
        assert_eq!(result.count, Some(0));
        assert!(result.message.is_none());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_descriptor_exposes_optional_query_argument() {
        let descriptor = descriptor();
        assert_eq!(descriptor.name, TOOL_NAME);
        assert_eq!(descriptor.template, TEMPLATE_URI);
        assert!(descriptor.input_schema["properties"]["query"].is_object());
        assert_eq!(
            descriptor.input_schema["required"]
                .as_array()
                .map(Vec::len),
            Some(0)
        );
    }
}
