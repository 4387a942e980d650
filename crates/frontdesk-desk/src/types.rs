//! Help desk records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Resolved,
    Unresolved,
}

impl std::str::FromStr for RequestStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "resolved" => Ok(Self::Resolved),
            "unresolved" => Ok(Self::Unresolved),
            _ => Err(()),
        }
    }
}

/// A caller question waiting on (or handled by) a supervisor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub id: String,
    pub caller_id: String,
    pub question: String,
    pub status: RequestStatus,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// A supervisor answer, reused for later questions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub created_at: String,
}

/// Everything the desk persists. Both lists are newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeskData {
    #[serde(default)]
    pub requests: Vec<HelpRequest>,
    #[serde(default)]
    pub knowledge: Vec<KnowledgeItem>,
}

/// What `submit` did with a question.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The knowledge base already had an answer.
    Known { answer: String },
    /// A new pending request was opened.
    Created(HelpRequest),
}
