//! `tracing` subscriber setup
//!
//! `RUST_LOG` takes precedence over the built-in filter. Output is either
//! human-readable text or one JSON object per line.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "truckroute_server=debug,presentation_http=debug,infrastructure=debug,integration_tomtom=debug,application=debug,tower_http=debug";

/// Logging setup errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(json: bool) -> Result<(), TelemetryError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_target(true));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))
}
