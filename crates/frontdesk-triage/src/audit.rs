//! Audit trail of what the agent told each caller.

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::rules::FALLBACK_PHRASE;
use crate::types::AnswerSource;

/// One observable step of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    /// The caller was given an answer.
    Answered {
        caller_id: String,
        source: AnswerSource,
        text: String,
    },
    /// The caller was told the question goes to a supervisor.
    Escalating { caller_id: String, question: String },
    /// A pending request now tracks the question.
    Escalated { caller_id: String, request_id: String },
    /// No pending request could be secured.
    Failed { caller_id: String },
}

/// Receives audit events from the triager.
pub trait AuditSink: Send + Sync {
    fn notify(&self, event: &AuditEvent);
}

/// Writes audit events as `tracing` events under the `frontdesk::audit` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn notify(&self, event: &AuditEvent) {
        match event {
            AuditEvent::Answered { caller_id, source, text } => {
                info!(target: "frontdesk::audit", source = %source, "[agent->caller {}] {}", caller_id, text);
            }
            AuditEvent::Escalating { caller_id, question } => {
                info!(target: "frontdesk::audit", question = %question, "[agent->caller {}] {}", caller_id, FALLBACK_PHRASE);
            }
            AuditEvent::Escalated { caller_id, request_id } => {
                info!(target: "frontdesk::audit", "Escalated question from {} as request {}", caller_id, request_id);
            }
            AuditEvent::Failed { caller_id } => {
                warn!(target: "frontdesk::audit", "Could not escalate question from {}: request store gave no id", caller_id);
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingAudit {
    events: Mutex<Vec<AuditEvent>>,
}

impl RecordingAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of events seen so far, oldest first.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().clone()
    }
}

impl AuditSink for RecordingAudit {
    fn notify(&self, event: &AuditEvent) {
        self.events.lock().push(event.clone());
    }
}
