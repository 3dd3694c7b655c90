//! Route service - geocode, route, and price a truck trip

use std::{fmt, sync::Arc};

use domain::{Coordinate, GeocodeResult, RouteResult, estimate_cost};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, RoutingPort},
};

/// A calculated route with its approximate cost
#[derive(Debug, Clone, PartialEq)]
pub struct RouteQuote {
    pub route: RouteResult,
    pub approx_cost: f64,
}

impl From<RouteResult> for RouteQuote {
    fn from(route: RouteResult) -> Self {
        let approx_cost = estimate_cost(route.distance_km);
        Self { route, approx_cost }
    }
}

/// A route quote computed from two free-text addresses
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRouteQuote {
    pub quote: RouteQuote,
    pub pickup: GeocodeResult,
    pub destination: GeocodeResult,
}

/// Service for quoting truck routes
pub struct RouteService {
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
}

impl fmt::Debug for RouteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteService").finish_non_exhaustive()
    }
}

impl RouteService {
    /// Create a new route service
    pub fn new(geocoder: Arc<dyn GeocodingPort>, router: Arc<dyn RoutingPort>) -> Self {
        Self { geocoder, router }
    }

    /// Quote a route between two coordinates
    #[instrument(skip(self), fields(pickup = %pickup, destination = %destination))]
    pub async fn quote_by_coordinates(
        &self,
        pickup: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteQuote, ApplicationError> {
        let route = self.router.route(pickup, destination).await?;

        debug!(
            distance_km = route.distance_km,
            eta_minutes = route.eta_minutes,
            "Route calculated"
        );

        Ok(RouteQuote::from(route))
    }

    /// Geocode both addresses (pickup first), then quote the route between them
    ///
    /// Stops at the first failure; later steps are not attempted.
    #[instrument(skip(self))]
    pub async fn quote_by_address(
        &self,
        pickup_address: &str,
        destination_address: &str,
    ) -> Result<AddressRouteQuote, ApplicationError> {
        let pickup = self.geocoder.geocode(pickup_address).await?;
        let destination = self.geocoder.geocode(destination_address).await?;

        info!(
            "Geocoded: {pickup_address} → {}, {}",
            pickup.coordinate.lat(),
            pickup.coordinate.lng()
        );
        info!(
            "Geocoded: {destination_address} → {}, {}",
            destination.coordinate.lat(),
            destination.coordinate.lng()
        );

        let quote = self
            .quote_by_coordinates(&pickup.coordinate, &destination.coordinate)
            .await?;

        Ok(AddressRouteQuote {
            quote,
            pickup,
            destination,
        })
    }
}
