use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Map, Value};
use std::sync::Arc;

use crate::domain::content::ContentService;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness only reflects configuration; upstreams are not probed
pub async fn health_ready(State(content_service): State<Arc<ContentService>>) -> impl IntoResponse {
    let status = content_service.source_status();
    let any_configured = status.iter().any(|(_, configured)| *configured);

    let sources: Map<String, Value> = status
        .into_iter()
        .map(|(name, configured)| {
            let state = if configured { "configured" } else { "not_configured" };
            (name.to_string(), Value::from(state))
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "status": if any_configured { "ready" } else { "degraded" },
            "sources": sources,
        })),
    )
}
