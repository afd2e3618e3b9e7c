//! # Tarefas API Server
//!
//! HTTP entry point.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tracing ──► ApiConfig::load ──► log filter ──► Database::new ──► serve│
//! │                                                                   │     │
//! │                              Ctrl+C / SIGTERM ──► drain ──► close pool │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! tarefas-api                       # defaults + platform config file
//! tarefas-api --config ./api.toml   # explicit config file
//! ```

use std::path::PathBuf;

use anyhow::Context;
use tarefas_api::{app, ApiConfig, AppState, DEFAULT_LOG_FILTER};
use tarefas_db::{Database, DbConfig};
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter_handle = init_tracing();

    info!("Starting Tarefas API server...");

    let config = ApiConfig::load(config_path_from_args()).context("Failed to load configuration")?;

    if let Err(e) = filter_handle.reload(config.env_filter()?) {
        warn!(?e, "Failed to apply configured log filter");
    }
    info!(
        addr = %config.server.bind_address(),
        db_path = %config.database.path.display(),
        "Configuration loaded"
    );

    if let Some(parent) = config.database.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }
    }

    let db_config =
        DbConfig::new(&config.database.path).max_connections(config.database.max_connections);
    let db = Database::new(db_config)
        .await
        .context("Failed to open database")?;
    info!("Database ready");

    let listener = tokio::net::TcpListener::bind(config.server.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_address()))?;
    info!(addr = %config.server.bind_address(), "Listening");

    axum::serve(listener, app(AppState::new(db.clone())))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Reads `--config <path>` / `-c <path>` from the command line.
fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" || arg == "-c" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

/// Installs the global tracing subscriber before configuration is read.
///
/// Starts from `RUST_LOG` or [`DEFAULT_LOG_FILTER`]; the returned handle
/// swaps in the configured filter once it is known.
fn init_tracing() -> reload::Handle<EnvFilter, Registry> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    handle
}

/// Graceful shutdown signal handler.
///
/// If a handler cannot be installed that source never fires; the other
/// one still can.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
