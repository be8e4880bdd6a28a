//! Invocable operation endpoint.

use axum::{Json, body::Bytes, extract::State};
use serde::{Deserialize, Serialize};

use harborlane_core::InvocationResult;

use crate::error::AppError;
use crate::state::AppState;
use crate::tool::{self, INVOKED_STATUS, INVOKING_STATUS, TEMPLATE_URI};

/// Optional request body for an invocation.
#[derive(Debug, Default, Deserialize)]
pub struct InvokeRequest {
    /// Free-text filter argument.
    pub query: Option<String>,
}

/// Response envelope for one invocation: the textual summary, the structured
/// payload, and the host-display metadata (template reference plus
/// invoking/invoked status strings).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeResponse {
    pub summary: String,
    pub result: InvocationResult,
    pub template: &'static str,
    pub invoking: &'static str,
    pub invoked: &'static str,
}

/// `POST /api/invoke` - run the catalog operation once.
///
/// The body is optional; an absent or empty body behaves like an absent
/// query. A present but malformed body is a client error.
pub async fn invoke_tool(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<InvokeResponse>, AppError> {
    let request: InvokeRequest = if body.is_empty() {
        InvokeRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("invalid request body: {e}")))?
    };
    let query = request.query.as_deref().filter(|q| !q.trim().is_empty());

    let result = state.tool().invoke(query).await;
    let summary = tool::summarize(&result);

    Ok(Json(InvokeResponse {
        summary,
        result,
        template: TEMPLATE_URI,
        invoking: INVOKING_STATUS,
        invoked: INVOKED_STATUS,
    }))
}
