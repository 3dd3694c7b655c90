//! TomTom truck routing client
//!
//! Calculates routes with the [Routing API](https://developer.tomtom.com/routing-api/documentation)
//! using fixed truck parameters (`travelMode=truck`, `vehicleCommercial=true`).
//! Vehicle dimensions and weights are not sent.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::config::TomTomConfig;
use crate::error::TomTomError;
use crate::models::{CalculateRouteResponse, Route, describe_failure};

/// Trait for routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Calculate the best truck route between two coordinate pairs
    async fn calculate_route(
        &self,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> Result<Route, TomTomError>;
}

/// TomTom Routing API client
#[derive(Debug)]
pub struct TomTomRoutingClient {
    client: Client,
    config: TomTomConfig,
    api_key: SecretString,
}

impl TomTomRoutingClient {
    /// Create a new TomTom routing client
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client cannot
    /// be initialized.
    pub fn new(config: &TomTomConfig) -> Result<Self, TomTomError> {
        let api_key = config
            .api_key()
            .map(|key| SecretString::from(key.to_owned()))
            .ok_or_else(|| TomTomError::ConfigurationError("missing API key".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("truckroute/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TomTomError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Fixed routing query parameters
    fn route_params(&self) -> Vec<(&str, &str)> {
        let mut params = vec![
            ("key", self.api_key.expose_secret()),
            ("travelMode", "truck"),
            ("vehicleCommercial", "true"),
        ];
        if !self.config.instructions_type.is_empty() {
            params.push(("instructionsType", self.config.instructions_type.as_str()));
        }
        params
    }

    /// Parse the raw routing response and pick the first candidate
    fn parse_route_response(body: &str) -> Result<Route, TomTomError> {
        let raw: CalculateRouteResponse =
            serde_json::from_str(body).map_err(|e| TomTomError::ParseError(e.to_string()))?;

        raw.routes.into_iter().next().ok_or(TomTomError::NoRouteFound)
    }
}

#[async_trait]
impl RoutingClient for TomTomRoutingClient {
    #[instrument(skip(self), fields(from = %format!("{from_lat},{from_lon}"), to = %format!("{to_lat},{to_lon}")))]
    async fn calculate_route(
        &self,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> Result<Route, TomTomError> {
        let locations = format!("{from_lat},{from_lon}:{to_lat},{to_lon}");
        let url = self
            .config
            .endpoint(&["routing", "1", "calculateRoute", &locations, "json"])
            .map_err(TomTomError::ConfigurationError)?;

        debug!(%locations, "Calculating truck route");

        let response = self
            .client
            .get(url)
            .query(&self.route_params())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Routing request failed");
                if e.is_timeout() {
                    TomTomError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TomTomError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TomTomError::ParseError(e.to_string()))?;

        if !status.is_success() {
            warn!(%status, %body, "Routing request rejected");
            return Err(TomTomError::RequestFailed(describe_failure(status, &body)));
        }

        let route = Self::parse_route_response(&body).inspect_err(|e| {
            if e.is_no_route() {
                warn!("No route found");
            }
        })?;

        debug!(
            length_in_meters = route.summary.length_in_meters,
            travel_time_in_seconds = route.summary.travel_time_in_seconds,
            "Route calculated"
        );
        Ok(route)
    }
}
