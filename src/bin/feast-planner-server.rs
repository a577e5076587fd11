// ABOUTME: Main binary for the feast planner HTTP server
// ABOUTME: Wires configuration, logging, storage, and the router together
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feast planner server binary

use anyhow::{Context, Result};
use clap::Parser;
use feast_planner::config::{PlanningConfig, ServerConfig};
use feast_planner::logging;
use feast_planner::resources::ServerResources;
use feast_planner::routes;
use feast_planner::storage::InMemoryStore;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "feast-planner-server",
    about = "Menu planning server with shopping-list calculation",
    version
)]
struct Args {
    /// HTTP port to listen on (overrides HTTP_PORT)
    #[arg(long)]
    http_port: Option<u16>,

    /// Host address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env().context("Failed to initialize logging")?;

    let mut config = ServerConfig::from_env().context("Failed to load server configuration")?;
    if let Some(port) = args.http_port {
        config.http_port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    info!("{}", config.summary());

    let planning = PlanningConfig::from_env().context("Failed to load planning configuration")?;

    let store = Arc::new(InMemoryStore::new());
    let resources = Arc::new(ServerResources::new(store, config.clone(), planning));
    let app = routes::router(resources);

    let addr = format!("{}:{}", config.host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(address = %addr, "Feast planner server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received, draining connections");
    }
}
