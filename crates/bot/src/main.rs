mod dispatch;
mod handler;
mod render;
mod telegram;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use magnetar_core::{
    load_config, validate_config, ApibayClient, MagnetLinkBuilder, SearchOrchestrator, Searcher,
};

use handler::BotHandler;
use telegram::{run_poller, TelegramClient};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("MAGNETAR_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Upstream index: {}", config.upstream.base_url);
    info!(
        "Tracker suffix configured: {}",
        !config.magnet.tracker_suffix.is_empty()
    );

    // Wire up the core
    let searcher: Arc<dyn Searcher> = Arc::new(ApibayClient::new(config.upstream.clone()));
    let magnet = MagnetLinkBuilder::new(config.magnet.tracker_suffix.clone());
    let orchestrator = Arc::new(SearchOrchestrator::new(searcher, magnet));

    let handler = BotHandler::new(orchestrator, true);
    let client = TelegramClient::new(&config.telegram);

    // Poll until shutdown
    run_poller(&client, &handler, shutdown_signal()).await;

    info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
