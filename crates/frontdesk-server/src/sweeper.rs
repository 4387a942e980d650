//! Background sweep that gives up on requests nobody answered in time.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::state::DeskState;

pub const SWEEP_INTERVAL: Duration = Duration::from_secs(10);

/// Start the timeout sweeper task.
pub fn start_timeout_sweeper(state: Arc<DeskState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Timeout sweeper started (timeout={}ms, every {}s)",
            state.config.request_timeout.as_millis(),
            SWEEP_INTERVAL.as_secs()
        );
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(e) = state
                .desk
                .sweep_expired(chrono::Utc::now(), state.config.request_timeout)
            {
                error!("Timeout sweep failed: {}", e);
            }
        }
    })
}
