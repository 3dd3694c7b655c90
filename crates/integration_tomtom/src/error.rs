//! Routing error types

use thiserror::Error;

/// Errors that can occur during route calculation
#[derive(Debug, Error)]
pub enum TomTomError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The routing service answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the routing service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider returned zero route candidates
    #[error("No route found")]
    NoRouteFound,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl TomTomError {
    /// Returns true if the provider answered but had no route
    #[must_use]
    pub const fn is_no_route(&self) -> bool {
        matches!(self, Self::NoRouteFound)
    }
}
