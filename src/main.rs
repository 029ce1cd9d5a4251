//! Proposal discovery server.

use anyhow::Context;
use clap::Parser;
use proposal_discovery::api::rest::{AppState, create_router};
use proposal_discovery::config::AppConfig;
use proposal_discovery::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "proposal-discovery", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "DISCOVERY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    telemetry::init(&config.logging).context("initializing logging")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        registry = %config.discovery.base_url,
        oracle = %config.quality_oracle.base_url,
        "starting proposal discovery"
    );

    let state = AppState::from_config(&config).context("building upstream clients")?;
    let router = create_router(Arc::new(state));

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| format!("binding {}:{}", config.server.host, config.server.port))?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
