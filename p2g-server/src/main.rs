//! P2G Sync Server - Headless Daemon
//!
//! A Rust HTTP server that:
//! - Accepts sync requests on `POST /api/sync` and forwards them to the sync worker
//! - Reports automatic sync status on `GET /api/sync`
//! - Optionally runs a periodic background sync
//!
//! Access via: http://localhost:8080

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod commands;
mod router;
mod scheduler;
mod server_utils;
mod state;

#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands};
use p2g_core::config::{load_config, validate_config};
use p2g_core::{RemoteSyncService, SyncService};
use p2g_types::models::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = resolve_config(&cli)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Config(cmd) => commands::handle_config_command(cmd, &config),
        Commands::Sync { count, ids } => commands::handle_sync(&config, count, ids).await,
        Commands::Status => commands::handle_status(&config).await,
    }
}

/// Load the config file, apply CLI/env overrides, then validate the result.
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = load_config(&cli.config)?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    validate_config(&config)?;
    Ok(config)
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

async fn serve(config: AppConfig) -> Result<()> {
    info!("🚀 P2G Sync starting on port {}...", config.server.port);

    let sync_service: Arc<dyn SyncService> = Arc::new(RemoteSyncService::new(&config.worker)?);
    info!("🔗 Forwarding sync requests to {}", config.worker.base_url);

    let state = AppState::new(sync_service, config.clone());
    scheduler::start_auto_sync(state.clone());

    let app = router::build_router(state);
    let listener = server_utils::create_listener(&config.server).await?;

    info!("🌐 Server listening on http://{}", listener.local_addr()?);
    info!("🔌 Sync endpoint at http://{}/api/sync", listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Server stopped");
    Ok(())
}
