//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Messages are what ends up in the client-visible `error` field, so adapters
/// are responsible for prefixing them with the stage that failed.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (missing or malformed input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The provider answered but returned no candidates
    #[error("{0}")]
    NotFound(String),

    /// The routing provider returned zero routes
    #[error("No route found")]
    NoRouteFound,

    /// The outbound call failed (network, non-2xx, malformed payload)
    #[error("{0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}
