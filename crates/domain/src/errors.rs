//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required input was missing or empty
    #[error("{0}")]
    InvalidInput(String),

    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

impl DomainError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
