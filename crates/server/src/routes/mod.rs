//! HTTP route handlers for the catalog server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health       - Liveness check
//! POST /api/catalog  - Local retrieval endpoint (no body required)
//! POST /api/invoke   - Invocable catalog operation (optional query)
//! ```

pub mod catalog;
pub mod invoke;

use axum::{Router, routing::post};

use crate::state::AppState;

/// All API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/catalog", post(catalog::fetch_catalog))
        .route("/api/invoke", post(invoke::invoke_tool))
}
