//! Journal Engine Binary
//!
//! Serves trading-journal analytics over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin journal-engine
//! ```
//!
//! # Environment Variables
//!
//! - `JOURNAL_CONFIG`: Path to the YAML config (default: `config.yaml`)
//! - `RUST_LOG`: Log filter (default: `journal_engine=<observability.logging.level>`)
//!
//! A missing config file is not an error; built-in defaults are used.

use std::sync::Arc;

use anyhow::Context;
use journal_engine::config::{Config, ConfigError, config_path_from_env, load_config};
use journal_engine::infrastructure::http::{AppState, create_router};
use journal_engine::infrastructure::persistence::InMemoryTradeRepository;
use journal_engine::telemetry::init_tracing;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config_path = config_path_from_env();
    let (config, config_source) = match load_config(Some(&config_path)) {
        Ok(config) => (config, config_path.as_str()),
        Err(ConfigError::ReadError { .. }) => (Config::default(), "defaults"),
        Err(e) => return Err(e).context("invalid configuration"),
    };

    init_tracing(&config.observability.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = config_source,
        breakeven_policy = ?config.analytics.breakeven_policy,
        starting_balance = %config.analytics.starting_balance,
        "Starting Journal Engine"
    );

    let trade_repo = Arc::new(InMemoryTradeRepository::new());
    let state = AppState::new(
        trade_repo,
        config.analytics.aggregator(),
        config.analytics.starting_balance,
        env!("CARGO_PKG_VERSION"),
    );
    let app = create_router(state);

    let http_addr = config.server.socket_addr();
    let listener = TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /health");
    tracing::info!("  POST   /api/v1/stats");
    tracing::info!("  POST   /api/v1/users/{{user_id}}/trades");
    tracing::info!("  GET    /api/v1/users/{{user_id}}/dashboard");
    tracing::info!("  DELETE /api/v1/users/{{user_id}}/trades/{{trade_id}}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Journal Engine stopped");
    Ok(())
}

/// Load `.env` from the working directory or the nearest ancestor.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
