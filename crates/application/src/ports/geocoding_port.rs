//! Geocoding service port
//!
//! Resolves free-text addresses to coordinates. Adapters in the infrastructure
//! layer implement this port using a geocoding API.

use async_trait::async_trait;
use domain::GeocodeResult;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to its best-matching coordinate
    ///
    /// Empty or whitespace-only addresses fail with `ApplicationError::Domain`
    /// before any outbound call is made.
    async fn geocode(&self, address: &str) -> Result<GeocodeResult, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }
}
