//! Help desk — the request store behind the agent.
//!
//! Holds help requests raised by callers, lets a supervisor answer them,
//! and learns every answer into a knowledge base that is consulted before
//! a new request is opened.

pub mod desk;
pub mod types;

pub use desk::RequestDesk;
pub use types::*;
