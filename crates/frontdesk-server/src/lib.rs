//! Front Desk HTTP server — the call agent and the help desk it escalates to.

pub mod routes;
pub mod state;
pub mod sweeper;

pub use routes::{build_agent_router, build_desk_router};
pub use state::{AgentState, DeskState};
