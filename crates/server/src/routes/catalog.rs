//! Local retrieval endpoint.
//!
//! The fallback data path for a surface running without invocation data. It
//! delegates to the gateway and mirrors its boundary rule: failures become a
//! structured `{ error }` body, never an unhandled error.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::state::AppState;

/// `POST /api/catalog` - fetch the catalog through the gateway.
///
/// No request body required. Responds `{ "catalog": [...] }` on success or
/// `500 { "error": "..." }` when the fetch failed.
pub async fn fetch_catalog(State(state): State<AppState>) -> impl IntoResponse {
    let result = state.gateway().fetch().await;

    match result.error {
        Some(error) => {
            tracing::warn!(error = %error, "catalog fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error })),
            )
                .into_response()
        }
        None => Json(json!({ "catalog": result.catalog })).into_response(),
    }
}
