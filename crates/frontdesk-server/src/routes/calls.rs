//! Call simulation — one caller question in, one triage outcome out.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use frontdesk_triage::ResolutionOutcome;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::state::AgentState;

pub fn routes() -> Router<Arc<AgentState>> {
    Router::new().route("/simulate_call", post(simulate_call))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallRequest {
    pub caller_id: String,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CallResponse {
    Answered { answer: String },
    Escalated {
        #[serde(rename = "requestId")]
        request_id: String,
    },
    Error,
}

impl From<ResolutionOutcome> for CallResponse {
    fn from(outcome: ResolutionOutcome) -> Self {
        match outcome {
            ResolutionOutcome::Answered { text, .. } => Self::Answered { answer: text },
            ResolutionOutcome::Escalated { request_id } => Self::Escalated { request_id },
            ResolutionOutcome::Failed => Self::Error,
        }
    }
}

/// POST /simulate_call — resolve a caller's question.
async fn simulate_call(
    State(state): State<Arc<AgentState>>,
    Json(call): Json<CallRequest>,
) -> Json<CallResponse> {
    info!("Incoming call from {}: {}", call.caller_id, call.question);
    let outcome = state.triager.resolve(&call.caller_id, &call.question).await;
    Json(outcome.into())
}
