//! Logging initialisation

mod logging;

pub use logging::{DEFAULT_LOG_FILTER, TelemetryError, init_logging};
