//! Resolution triager — decides how a caller's question gets answered.
//!
//! Three ordered tiers: the request store (which may already know the
//! answer), the built-in salon rules, and finally escalation to a human
//! supervisor through a pending request in the store.

pub mod audit;
pub mod rules;
pub mod store;
pub mod triager;
pub mod types;

pub use audit::{AuditEvent, AuditSink, RecordingAudit, TracingAudit};
pub use rules::{LocalRule, RuleBook, FALLBACK_PHRASE};
pub use store::{HttpRequestStore, RequestStore};
pub use triager::Triager;
pub use types::*;
