//! Result payload for one tool invocation.

use serde::{Deserialize, Serialize};

use super::catalog::CatalogItem;

/// Structured payload returned by the invocable catalog operation.
///
/// Constructed fresh per invocation and never persisted. Serialized with
/// camelCase keys because the payload is consumed by the hosting runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InvocationResult {
    /// Brand name of the catalog service backing the surface.
    pub service_name: String,
    /// Echo of the free-text query argument, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Items to display, in source order.
    pub catalog: Vec<CatalogItem>,
    /// Number of items in `catalog`, when the fetch succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Diagnostic note for the consumer (e.g., query matched nothing).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Catalog fetch error, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InvocationResult {
    /// Whether the invocation carried displayable data.
    ///
    /// The reconciliation protocol keys precedence on this: only a non-empty
    /// catalog counts as "invocation data present".
    #[must_use]
    pub const fn has_data(&self) -> bool {
        !self.catalog.is_empty()
    }
}
