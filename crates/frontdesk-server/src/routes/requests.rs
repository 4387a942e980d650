//! Help desk routes — help requests and learned knowledge.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use frontdesk_desk::{RequestStatus, Submission};
use serde::Deserialize;

use super::error_response;
use crate::state::DeskState;

pub fn routes() -> Router<Arc<DeskState>> {
    Router::new()
        .route("/requests", post(create_request).get(list_requests))
        .route("/requests/{id}", get(get_request))
        .route("/requests/{id}/answer", post(answer_request))
        .route("/requests/{id}/unresolved", post(mark_unresolved))
        .route("/knowledge", get(list_knowledge))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRequestBody {
    #[serde(default)]
    caller_id: Option<String>,
    #[serde(default)]
    question: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AnswerBody {
    #[serde(default)]
    answer: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ListParams {
    status: Option<String>,
}

/// POST /api/requests — answer from knowledge or open a pending request.
async fn create_request(
    State(state): State<Arc<DeskState>>,
    Json(body): Json<CreateRequestBody>,
) -> Response {
    let caller_id = body.caller_id.unwrap_or_default();
    let question = body.question.unwrap_or_default();

    match state.desk.submit(&caller_id, &question) {
        Ok(Submission::Known { answer }) => {
            Json(serde_json::json!({ "handled": true, "answer": answer })).into_response()
        }
        Ok(Submission::Created(request)) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

/// GET /api/requests?status= — unknown statuses are ignored.
async fn list_requests(
    State(state): State<Arc<DeskState>>,
    Query(params): Query<ListParams>,
) -> Response {
    let status = params.status.and_then(|s| s.parse::<RequestStatus>().ok());
    Json(state.desk.list(status)).into_response()
}

/// GET /api/requests/{id}
async fn get_request(State(state): State<Arc<DeskState>>, Path(id): Path<String>) -> Response {
    match state.desk.get(&id) {
        Ok(request) => Json(request).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

/// POST /api/requests/{id}/answer — supervisor reply; also teaches the knowledge base.
async fn answer_request(
    State(state): State<Arc<DeskState>>,
    Path(id): Path<String>,
    Json(body): Json<AnswerBody>,
) -> Response {
    let answer = body.answer.unwrap_or_default();
    match state.desk.answer(&id, &answer) {
        Ok(request) => Json(request).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

/// POST /api/requests/{id}/unresolved
async fn mark_unresolved(State(state): State<Arc<DeskState>>, Path(id): Path<String>) -> Response {
    match state.desk.mark_unresolved(&id) {
        Ok(request) => Json(request).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

/// GET /api/knowledge
async fn list_knowledge(State(state): State<Arc<DeskState>>) -> Response {
    Json(state.desk.knowledge()).into_response()
}
