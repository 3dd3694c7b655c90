//! Truck routing service port

use async_trait::async_trait;
use domain::{Coordinate, RouteResult};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for truck route calculation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Calculate a truck route between two coordinates
    ///
    /// Fails with `ApplicationError::NoRouteFound` when the provider returns no
    /// route and `ApplicationError::ExternalService` when the call itself fails.
    async fn route(
        &self,
        pickup: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteResult, ApplicationError>;
}
