//! End-to-end call flow: the agent and the help desk on real sockets.
//!
//! Both routers are bound to ephemeral loopback ports; the agent reaches the
//! desk over HTTP exactly as it does in production.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use frontdesk_core::{AgentConfig, DeskConfig};
use frontdesk_desk::RequestDesk;
use frontdesk_server::{build_agent_router, build_desk_router, AgentState, DeskState};
use serde_json::{json, Value};

const HOURS: &str = "We are open Mon-Fri 9am-6pm and Sat 10am-4pm; closed Sun.";

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_desk(desk: RequestDesk) -> String {
    let state = Arc::new(DeskState::new(DeskConfig::default(), desk));
    spawn(build_desk_router(state)).await
}

async fn spawn_agent(server_url: &str) -> String {
    let config = AgentConfig {
        port: 0,
        server_url: server_url.to_string(),
        store_timeout: Duration::from_secs(2),
    };
    let state = Arc::new(AgentState::new(config).unwrap());
    spawn(build_agent_router(state)).await
}

async fn simulate_call(agent: &str, caller_id: &str, question: &str) -> Value {
    reqwest::Client::new()
        .post(format!("{}/simulate_call", agent))
        .json(&json!({"caller_id": caller_id, "question": question}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_on_both_surfaces() {
    let desk = spawn_desk(RequestDesk::in_memory()).await;
    let agent = spawn_agent(&desk).await;

    for base in [&desk, &agent] {
        let body: Value = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, json!({"ok": true}));
    }
}

#[tokio::test]
async fn test_local_answer_through_live_desk() {
    let desk = spawn_desk(RequestDesk::in_memory()).await;
    let agent = spawn_agent(&desk).await;

    let body = simulate_call(&agent, "c1", "What are your hours?").await;
    assert_eq!(body, json!({"status": "answered", "answer": HOURS}));
}

#[tokio::test]
async fn test_escalate_answer_then_learn() {
    let desk = spawn_desk(RequestDesk::in_memory()).await;
    let agent = spawn_agent(&desk).await;
    let client = reqwest::Client::new();

    let body = simulate_call(&agent, "c2", "Do you do pedicures?").await;
    assert_eq!(body["status"], "escalated");
    let request_id = body["requestId"].as_str().unwrap().to_string();

    // Exactly one pending request, carrying the escalated id.
    let pending: Value = client
        .get(format!("{}/api/requests?status=pending", desk))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let pending = pending.as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["id"], request_id.as_str());
    assert_eq!(pending[0]["callerId"], "c2");

    // Supervisor answers.
    let resolved: Value = client
        .post(format!("{}/api/requests/{}/answer", desk, request_id))
        .json(&json!({"answer": "Yes, pedicures are $35."}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resolved["status"], "resolved");

    // Next caller gets the learned answer from the backend tier.
    let body = simulate_call(&agent, "c3", "Do you do pedicures?").await;
    assert_eq!(body, json!({"status": "answered", "answer": "Yes, pedicures are $35."}));
}

#[tokio::test]
async fn test_store_down() {
    // Nothing listens on the discard port.
    let agent = spawn_agent("http://127.0.0.1:9").await;

    let body = simulate_call(&agent, "c4", "HairCut?").await;
    assert_eq!(body, json!({"status": "answered", "answer": "A haircut is $40."}));

    let body = simulate_call(&agent, "c5", "Can you fix my plumbing?").await;
    assert_eq!(body, json!({"status": "error"}));
}

#[tokio::test]
async fn test_desk_persists_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let desk = spawn_desk(RequestDesk::open(&path).unwrap()).await;
    let agent = spawn_agent(&desk).await;

    let body = simulate_call(&agent, "c6", "Do you offer gift cards?").await;
    assert_eq!(body["status"], "escalated");

    let reopened = RequestDesk::open(&path).unwrap();
    let requests = reopened.list(None);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, body["requestId"].as_str().unwrap());
}
