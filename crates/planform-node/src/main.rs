//! # Planform Node
//!
//! Action server the dialogue engine calls to run plan actions.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod state;

use config::{LogFormat, NodeConfig};
use state::AppState;

/// Install the global tracing subscriber.
fn init_tracing(config: &NodeConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.log_format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// Run the action server until ctrl-c.
pub async fn run_server(config: NodeConfig) -> anyhow::Result<()> {
    let state = AppState::builtin()?;
    info!(
        "Serving plans {:?} and {} actions",
        state.plans.names(),
        planform_plans::registered_actions().count()
    );

    let app = api::create_router(state);

    let listener = TcpListener::bind(config.bind_address).await?;
    info!("Listening on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Planform node stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = NodeConfig::from_env()?;
    init_tracing(&config)?;
    run_server(config).await
}
