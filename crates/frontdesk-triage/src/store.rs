//! Request store client.
//!
//! The store exposes a single lookup-or-create call: it either already knows
//! the answer (`handled: true`) or registers a pending request and returns
//! its id.

use std::time::Duration;

use async_trait::async_trait;
use frontdesk_core::{AgentConfig, Error, Result};
use reqwest::Client;
use tracing::debug;

use crate::types::{StoreQuery, StoreReply};

/// Anything that can look up or register a caller's question.
#[async_trait]
pub trait RequestStore: Send + Sync {
    async fn lookup_or_create(&self, caller_id: &str, question: &str) -> Result<StoreReply>;
}

/// Request store reached over HTTP (`POST {base}/api/requests`).
pub struct HttpRequestStore {
    client: Client,
    endpoint: String,
}

impl HttpRequestStore {
    /// Build a client whose every call is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/requests", base_url.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        Self::new(&config.server_url, config.store_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RequestStore for HttpRequestStore {
    async fn lookup_or_create(&self, caller_id: &str, question: &str) -> Result<StoreReply> {
        let body = StoreQuery {
            caller_id: caller_id.to_string(),
            question: question.to_string(),
        };

        debug!("POST {} for caller {}", self.endpoint, caller_id);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::StoreUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::StoreRejected(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::StoreUnreachable(format!("Failed to read body: {}", e)))?;

        StoreReply::from_slice(&bytes)
    }
}
