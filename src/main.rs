//! Video Catalog Server
//!
//! Serves a filesystem-backed video library over HTTP: lists entries
//! derived from one directory per video, streams payloads with range
//! support, and filters the catalog by taxonomic rank.

mod catalog;
mod config;
mod config_file;
mod error;
mod http;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::http::create_router;
use crate::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "daaya-video-server";

/// Config file read when no path is given
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let first = args.next();

    // `--init-config [path]` writes a default config file and exits
    if first.as_deref() == Some("--init-config") {
        let path = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        init_config(&path)?;
        println!("Wrote default configuration to {}", path);
        return Ok(());
    }

    // Load configuration
    let config_path = first.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let (config, config_warning) = config_file::load_server_config(&config_path);

    // Initialize logging
    init_logging(&config);

    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    if let Some(warning) = config_warning {
        tracing::warn!("{}. Using defaults.", warning);
    }
    tracing::info!("Configuration loaded: {:?}", config);

    if config.catalog.create_root {
        if let Err(e) = std::fs::create_dir_all(&config.catalog.root) {
            tracing::warn!(
                "Could not create catalog root {:?}: {}",
                config.catalog.root,
                e
            );
        }
    }

    // Create application state
    let state = Arc::new(AppState::new(config.clone()));

    // Build router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .map_err(|e| ServerError::Config(format!("Invalid listen address: {}", e)))?;
    tracing::info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Write the default configuration to `path`
fn init_config(path: &str) -> Result<()> {
    config_file::generate_default_config(path)
        .map_err(|e| ServerError::Config(format!("Cannot write {}: {}", path, e)))
}

/// Initialize logging with tracing
fn init_logging(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "daaya_video_server={},tower_http=debug",
            config.log_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
