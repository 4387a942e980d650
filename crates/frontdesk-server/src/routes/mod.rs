//! HTTP route handlers.

pub mod calls;
pub mod health;
pub mod requests;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Json, Router};
use frontdesk_core::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::{AgentState, DeskState};

/// Router for the call agent: `/health`, `/simulate_call`.
pub fn build_agent_router(state: Arc<AgentState>) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(calls::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for the help desk: `/health`, `/api/requests*`, `/api/knowledge`.
pub fn build_desk_router(state: Arc<DeskState>) -> Router {
    Router::new()
        .merge(health::routes())
        .nest("/api", requests::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Map a domain error onto a status code and `{error}` body.
pub(crate) fn error_response(err: Error) -> (StatusCode, Json<serde_json::Value>) {
    let status = match &err {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::Conflict(_) => StatusCode::CONFLICT,
        e if e.is_store_failure() => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(error_response(Error::Validation("x".into())).0, StatusCode::BAD_REQUEST);
        assert_eq!(error_response(Error::NotFound("x".into())).0, StatusCode::NOT_FOUND);
        assert_eq!(error_response(Error::Conflict("x".into())).0, StatusCode::CONFLICT);
        assert_eq!(error_response(Error::StoreRejected(500)).0, StatusCode::BAD_GATEWAY);
        assert_eq!(
            error_response(Error::Config("x".into())).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body() {
        let (_, Json(body)) = error_response(Error::Conflict("already handled".into()));
        assert_eq!(body["error"], "Conflict: already handled");
    }
}
