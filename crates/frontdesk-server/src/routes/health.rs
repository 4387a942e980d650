//! Liveness check, shared by both surfaces.

use axum::routing::get;
use axum::{Json, Router};

pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}

/// GET /health — always `{ok: true}`.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}
