//! Front Desk — AI receptionist agent and the help desk it escalates to.

use std::sync::Arc;

use axum::Router;
use frontdesk_core::{AgentConfig, DeskConfig};
use frontdesk_server::{build_agent_router, build_desk_router, sweeper, AgentState, DeskState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str).unwrap_or("agent") {
        "agent" => run_agent().await,
        "desk" => run_desk().await,
        "--help" | "-h" | "help" => {
            println!("Front Desk — AI receptionist with supervisor escalation");
            println!();
            println!("Usage: frontdesk [command]");
            println!();
            println!("Commands:");
            println!("  agent    Answer calls on /simulate_call (default)");
            println!("  desk     Serve the help request store on /api");
            println!("  help     Show this help message");
            println!();
            println!("Environment:");
            println!("  PORT                 Listen port (agent 8000, desk 3001)");
            println!("  SERVER_URL           Help desk base URL for the agent");
            println!("  STORE_TIMEOUT_MS     Per-call timeout for help desk calls");
            println!("  FRONTDESK_DATA_FILE  Help desk JSON file (default data.json)");
            println!("  TIMEOUT_MS           Pending request timeout for the desk");
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}. Use 'frontdesk help' for usage.", other);
            std::process::exit(1);
        }
    }
}

async fn run_agent() -> anyhow::Result<()> {
    let config = AgentConfig::from_env()?;
    let port = config.port;

    info!(
        "Request store at {} (timeout {}ms)",
        config.server_url,
        config.store_timeout.as_millis()
    );

    let state = Arc::new(AgentState::new(config)?);
    serve(build_agent_router(state), port, "Agent").await
}

async fn run_desk() -> anyhow::Result<()> {
    let config = DeskConfig::from_env()?;
    let port = config.port;

    let state = Arc::new(DeskState::open(config)?);
    sweeper::start_timeout_sweeper(state.clone());

    serve(build_desk_router(state), port, "Help desk").await
}

async fn serve(app: Router, port: u16, name: &str) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("{} listening on {}", name, addr);

    axum::serve(listener, app).await?;

    Ok(())
}
