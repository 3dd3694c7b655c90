//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the TomTom integration and
//! provides configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::TomTomAdapter;
pub use config::{AppConfig, GeometryFormat, RequestMode, RouteConfig, ServerConfig};
pub use telemetry::{DEFAULT_LOG_FILTER, TelemetryError, init_logging};
