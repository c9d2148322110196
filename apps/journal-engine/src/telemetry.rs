//! Tracing Setup
//!
//! Installs the global `tracing` subscriber from the `observability.logging`
//! config section.
//!
//! # Configuration
//!
//! - `RUST_LOG`: standard `EnvFilter` directives; when set it wins over the
//!   configured level
//! - `observability.logging.level`: level for this crate (default `info`)
//! - `observability.logging.format`: `json` (default) or `pretty`
//! - `observability.logging.include_spans`: attach span context to events
//!
//! # Usage
//!
//! ```rust,ignore
//! use journal_engine::{config::LoggingConfig, telemetry::init_tracing};
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::LoggingConfig;

/// Crate target used in the default filter directive.
const CRATE_TARGET: &str = "journal_engine";

/// Telemetry setup errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Filter directive for the configured level, e.g. `journal_engine=debug`.
///
/// An unparseable level falls back to `info`.
#[must_use]
pub fn default_directive(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => format!("{CRATE_TARGET}={level}"),
        _ => format!("{CRATE_TARGET}=info"),
    }
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.level)))
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns `TelemetryError::Init` if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config);

    let result = if config.format == "pretty" {
        let span_events = if config.include_spans {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .with_span_events(span_events)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_current_span(config.include_spans)
            .with_span_list(config.include_spans)
            .try_init()
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    tracing::debug!(
        level = %config.level,
        format = %config.format,
        include_spans = config.include_spans,
        "Tracing initialized"
    );

    Ok(())
}
