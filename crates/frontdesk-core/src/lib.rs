//! Front Desk Core — configuration and error types shared by every crate.

pub mod config;
pub mod error;

pub use config::{AgentConfig, DeskConfig};
pub use error::{Error, Result};
