//! Resolution triager — request store, then local rules, then escalation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::audit::{AuditEvent, AuditSink};
use crate::rules::RuleBook;
use crate::store::RequestStore;
use crate::types::*;

/// Stateless three-tier resolver. Safe to share across concurrent calls.
pub struct Triager {
    store: Arc<dyn RequestStore>,
    audit: Arc<dyn AuditSink>,
    rules: RuleBook,
}

impl Triager {
    pub fn new(store: Arc<dyn RequestStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            store,
            audit,
            rules: RuleBook::salon(),
        }
    }

    /// Replace the built-in salon rules.
    pub fn with_rules(mut self, rules: RuleBook) -> Self {
        self.rules = rules;
        self
    }

    /// Resolve one caller question. Never fails; store faults become
    /// fall-throughs or, at worst, [`ResolutionOutcome::Failed`].
    pub async fn resolve(&self, caller_id: &str, question: &str) -> ResolutionOutcome {
        let first = self.lookup(caller_id, question).await;

        if let Some(outcome) = self.backend_tier(caller_id, first.as_ref()) {
            return outcome;
        }

        if let Some(outcome) = self.local_tier(caller_id, question) {
            return outcome;
        }

        self.escalation_tier(caller_id, question, first).await
    }

    /// Tier 1: the store already knows the answer.
    fn backend_tier(&self, caller_id: &str, reply: Option<&StoreReply>) -> Option<ResolutionOutcome> {
        let answer = reply?.known_answer()?;
        Some(self.answered(caller_id, AnswerSource::Backend, answer))
    }

    /// Tier 2: built-in rules.
    fn local_tier(&self, caller_id: &str, question: &str) -> Option<ResolutionOutcome> {
        let answer = self.rules.answer(question)?;
        Some(self.answered(caller_id, AnswerSource::Local, answer))
    }

    /// Tier 3: make sure a pending request exists, reusing the first reply's id.
    async fn escalation_tier(
        &self,
        caller_id: &str,
        question: &str,
        first: Option<StoreReply>,
    ) -> ResolutionOutcome {
        self.audit.notify(&AuditEvent::Escalating {
            caller_id: caller_id.to_string(),
            question: question.to_string(),
        });

        let reused = first.and_then(|reply| reply.id);
        let request_id = match reused {
            Some(id) => Some(id),
            None => {
                debug!("No request id from first lookup, creating one for {}", caller_id);
                self.lookup(caller_id, question).await.and_then(|reply| reply.id)
            }
        };

        match request_id {
            Some(request_id) => {
                self.audit.notify(&AuditEvent::Escalated {
                    caller_id: caller_id.to_string(),
                    request_id: request_id.clone(),
                });
                ResolutionOutcome::Escalated { request_id }
            }
            None => {
                self.audit.notify(&AuditEvent::Failed {
                    caller_id: caller_id.to_string(),
                });
                ResolutionOutcome::Failed
            }
        }
    }

    /// One store round-trip; any failure counts as "no reply".
    async fn lookup(&self, caller_id: &str, question: &str) -> Option<StoreReply> {
        match self.store.lookup_or_create(caller_id, question).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!("Request store lookup failed for {}: {}", caller_id, e);
                None
            }
        }
    }

    fn answered(&self, caller_id: &str, source: AnswerSource, text: &str) -> ResolutionOutcome {
        self.audit.notify(&AuditEvent::Answered {
            caller_id: caller_id.to_string(),
            source,
            text: text.to_string(),
        });
        ResolutionOutcome::Answered {
            source,
            text: text.to_string(),
        }
    }
}
