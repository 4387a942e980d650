//! Triage types.

use frontdesk_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    /// The request store's knowledge base.
    Backend,
    /// The built-in rule table.
    Local,
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend => write!(f, "backend"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Result of resolving one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ResolutionOutcome {
    Answered { source: AnswerSource, text: String },
    Escalated {
        #[serde(rename = "requestId")]
        request_id: String,
    },
    /// The store yielded no usable request id on either attempt.
    Failed,
}

/// Body of `POST /api/requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreQuery {
    pub caller_id: String,
    pub question: String,
}

/// The parts of a request store reply the triager cares about.
///
/// Replies are advisory: anything beyond "is this an object" is read
/// leniently, so a missing or oddly typed field simply counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreReply {
    pub handled: bool,
    pub answer: Option<String>,
    pub id: Option<String>,
}

impl StoreReply {
    /// Interpret a decoded JSON body.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            Error::MalformedStoreResponse(format!("expected a JSON object, got {}", value))
        })?;

        let text = |key: &str| {
            obj.get(key)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        };

        Ok(Self {
            handled: obj.get("handled").and_then(|v| v.as_bool()) == Some(true),
            answer: text("answer"),
            id: text("id").filter(|id| !id.trim().is_empty()),
        })
    }

    /// Parse a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| Error::MalformedStoreResponse(e.to_string()))?;
        Self::from_value(&value)
    }

    /// The store's answer, only when it marked the question handled.
    pub fn known_answer(&self) -> Option<&str> {
        if self.handled {
            self.answer.as_deref()
        } else {
            None
        }
    }

    /// Id of the pending request the store registered, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
