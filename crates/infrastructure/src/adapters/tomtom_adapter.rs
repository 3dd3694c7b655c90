//! TomTom adapter - Implements GeocodingPort and RoutingPort using integration_tomtom

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{GeocodingPort, RoutingPort};
use async_trait::async_trait;
use domain::{Coordinate, DomainError, GeocodeResult, RouteGeometry, RouteResult};
use integration_tomtom::{
    GeocodingClient, GeocodingError, Route, RoutingClient, TomTomConfig, TomTomError,
    TomTomGeocodingClient, TomTomRoutingClient,
};
use tracing::{instrument, warn};

use crate::config::GeometryFormat;

/// Adapter exposing the TomTom geocoding and truck routing clients as ports
pub struct TomTomAdapter {
    geocoder: Arc<dyn GeocodingClient>,
    router: Arc<dyn RoutingClient>,
    geometry: GeometryFormat,
}

impl std::fmt::Debug for TomTomAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TomTomAdapter")
            .field("geocoder", &"dyn GeocodingClient")
            .field("router", &"dyn RoutingClient")
            .field("geometry", &self.geometry)
            .finish()
    }
}

impl TomTomAdapter {
    /// Create an adapter from arbitrary client implementations
    pub fn new(
        geocoder: Arc<dyn GeocodingClient>,
        router: Arc<dyn RoutingClient>,
        geometry: GeometryFormat,
    ) -> Self {
        Self {
            geocoder,
            router,
            geometry,
        }
    }

    /// Create an adapter backed by the real TomTom HTTP clients
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP clients fail
    /// to initialize.
    pub fn from_config(
        config: &TomTomConfig,
        geometry: GeometryFormat,
    ) -> Result<Self, ApplicationError> {
        let geocoder = TomTomGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        let router = TomTomRoutingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self::new(Arc::new(geocoder), Arc::new(router), geometry))
    }

    /// Geometry format this adapter extracts from routes
    pub const fn geometry(&self) -> GeometryFormat {
        self.geometry
    }

    fn map_geocoding_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::InvalidAddress => DomainError::invalid_input("Invalid address").into(),
            GeocodingError::AddressNotFound(_) => {
                ApplicationError::NotFound(format!("Geocoding failed: {err}"))
            },
            GeocodingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(format!("Geocoding failed: {other}")),
        }
    }

    fn map_routing_error(err: TomTomError) -> ApplicationError {
        match err {
            TomTomError::NoRouteFound => ApplicationError::NoRouteFound,
            TomTomError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }

    /// Pick the configured geometry out of a provider route
    fn extract_geometry(&self, route: &Route) -> Result<RouteGeometry, ApplicationError> {
        match self.geometry {
            GeometryFormat::Points => route
                .first_leg_points()
                .map(|points| RouteGeometry::Points(points.to_vec()))
                .ok_or_else(|| {
                    ApplicationError::ExternalService(
                        "Malformed route response: route has no legs".to_string(),
                    )
                }),
            GeometryFormat::Polyline => route
                .first_section_polyline()
                .map(|polyline| RouteGeometry::Polyline(polyline.to_string()))
                .ok_or_else(|| {
                    ApplicationError::ExternalService(
                        "Malformed route response: route has no section polyline".to_string(),
                    )
                }),
        }
    }
}

#[async_trait]
impl GeocodingPort for TomTomAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeocodeResult, ApplicationError> {
        self.geocoder.geocode(address).await.map_err(|e| {
            warn!(error = %e, "Geocoding failed");
            Self::map_geocoding_error(e)
        })
    }
}

#[async_trait]
impl RoutingPort for TomTomAdapter {
    #[instrument(skip(self, pickup, destination), fields(pickup = %pickup, destination = %destination))]
    async fn route(
        &self,
        pickup: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteResult, ApplicationError> {
        let route = self
            .router
            .calculate_route(pickup.lat(), pickup.lng(), destination.lat(), destination.lng())
            .await
            .map_err(|e| {
                warn!(error = %e, "Routing failed");
                Self::map_routing_error(e)
            })?;

        let geometry = self.extract_geometry(&route).inspect_err(|e| {
            warn!(error = %e, "Unusable route geometry");
        })?;

        Ok(RouteResult::from_summary(
            route.summary.length_in_meters,
            route.summary.travel_time_in_seconds,
            geometry,
        ))
    }
}
