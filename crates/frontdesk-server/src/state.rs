//! Shared application state.

use std::sync::Arc;

use frontdesk_core::{AgentConfig, DeskConfig};
use frontdesk_desk::RequestDesk;
use frontdesk_triage::{HttpRequestStore, TracingAudit, Triager};

/// State behind the agent surface (`/simulate_call`).
pub struct AgentState {
    pub config: AgentConfig,
    pub triager: Triager,
}

impl AgentState {
    /// Wire a triager to the HTTP request store named in `config`.
    pub fn new(config: AgentConfig) -> frontdesk_core::Result<Self> {
        let store = HttpRequestStore::from_config(&config)?;
        let triager = Triager::new(Arc::new(store), Arc::new(TracingAudit));
        Ok(Self::with_triager(config, triager))
    }

    pub fn with_triager(config: AgentConfig, triager: Triager) -> Self {
        Self { config, triager }
    }
}

/// State behind the help desk surface (`/api/*`).
pub struct DeskState {
    pub config: DeskConfig,
    pub desk: RequestDesk,
}

impl DeskState {
    pub fn new(config: DeskConfig, desk: RequestDesk) -> Self {
        Self { config, desk }
    }

    /// Open the desk file named in `config`.
    pub fn open(config: DeskConfig) -> frontdesk_core::Result<Self> {
        let desk = RequestDesk::open(&config.data_file)?;
        Ok(Self::new(config, desk))
    }
}
