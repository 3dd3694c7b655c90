//! `POST /calculate-route`
//!
//! The accepted body depends on the configured request mode:
//!
//! - address: `{ "pickupAddress": "...", "destinationAddress": "..." }`
//! - coordinates: `{ "pickup": {"lat", "lng"}, "destination": {"lat", "lng"} }`
//!
//! Address-mode fields may also arrive as an
//! `application/x-www-form-urlencoded` body. A body that cannot be read, or
//! whose fields have the wrong type, is treated the same as a body with the
//! fields missing.

use std::collections::HashMap;

use application::{AddressRouteQuote, RouteQuote};
use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
};
use domain::{Coordinate, GeocodeResult, RouteGeometry};
use infrastructure::RequestMode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

pub const MISSING_ADDRESSES: &str = "Missing pickupAddress or destinationAddress";
pub const MISSING_LOCATIONS: &str = "Missing pickup or destination location";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Address-mode request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRouteRequest {
    pub pickup_address: Option<String>,
    pub destination_address: Option<String>,
}

impl AddressRouteRequest {
    /// Both addresses, if both are present and non-empty
    fn addresses(&self) -> Option<(&str, &str)> {
        match (&self.pickup_address, &self.destination_address) {
            (Some(pickup), Some(destination)) if !pickup.is_empty() && !destination.is_empty() => {
                Some((pickup.as_str(), destination.as_str()))
            },
            _ => None,
        }
    }
}

/// Coordinates-mode request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoordinateRouteRequest {
    pub pickup: Option<Coordinate>,
    pub destination: Option<Coordinate>,
}

/// Resolved endpoints, present only for address-mode responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEndpoints {
    pub pickup_formatted: String,
    pub destination_formatted: String,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub destination_lat: f64,
    pub destination_lng: f64,
}

impl ResolvedEndpoints {
    fn new(pickup: GeocodeResult, destination: GeocodeResult) -> Self {
        Self {
            pickup_lat: pickup.coordinate.lat(),
            pickup_lng: pickup.coordinate.lng(),
            destination_lat: destination.coordinate.lat(),
            destination_lng: destination.coordinate.lng(),
            pickup_formatted: pickup.formatted_address,
            destination_formatted: destination.formatted_address,
        }
    }
}

/// Successful route response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRouteResponse {
    /// `routePoints` or `routePolyline`
    #[serde(flatten)]
    pub geometry: RouteGeometry,
    pub distance_km: f64,
    pub eta_minutes: f64,
    pub approx_cost: f64,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<ResolvedEndpoints>,
}

impl From<RouteQuote> for CalculateRouteResponse {
    fn from(quote: RouteQuote) -> Self {
        Self {
            geometry: quote.route.geometry,
            distance_km: quote.route.distance_km,
            eta_minutes: quote.route.eta_minutes,
            approx_cost: quote.approx_cost,
            endpoints: None,
        }
    }
}

impl From<AddressRouteQuote> for CalculateRouteResponse {
    fn from(quote: AddressRouteQuote) -> Self {
        Self {
            endpoints: Some(ResolvedEndpoints::new(quote.pickup, quote.destination)),
            ..Self::from(quote.quote)
        }
    }
}

/// Calculate a truck route and its approximate cost
#[instrument(skip(state, request), fields(mode = %state.config.route.request_mode))]
pub async fn calculate_route(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<CalculateRouteResponse>, ApiError> {
    let body = read_body(request).await;

    let response = match state.config.route.request_mode {
        RequestMode::Address => by_address(&state, body).await?,
        RequestMode::Coordinates => by_coordinates(&state, body).await?,
    };

    Ok(Json(response))
}

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE))
}

/// Body as JSON; form fields become string members. `Null` if unreadable.
async fn read_body(request: Request) -> Value {
    if is_form(&request) {
        return match Form::<HashMap<String, String>>::from_request(request, &()).await {
            Ok(Form(fields)) => fields.into_iter().collect(),
            Err(rejection) => {
                debug!(%rejection, "Unreadable form body");
                Value::Null
            },
        };
    }

    match Json::<Value>::from_request(request, &()).await {
        Ok(Json(value)) => value,
        Err(rejection) => {
            debug!(%rejection, "Unreadable request body");
            Value::Null
        },
    }
}

async fn by_address(state: &AppState, body: Value) -> Result<CalculateRouteResponse, ApiError> {
    let request: AddressRouteRequest = serde_json::from_value(body).unwrap_or_default();
    let (pickup, destination) = request
        .addresses()
        .ok_or_else(|| ApiError::BadRequest(MISSING_ADDRESSES.to_string()))?;

    state
        .route_service
        .quote_by_address(pickup, destination)
        .await
        .map(CalculateRouteResponse::from)
        .map_err(|e| ApiError::address_failure(&e))
}

async fn by_coordinates(state: &AppState, body: Value) -> Result<CalculateRouteResponse, ApiError> {
    let request: CoordinateRouteRequest = serde_json::from_value(body).unwrap_or_default();
    let (Some(pickup), Some(destination)) = (request.pickup, request.destination) else {
        return Err(ApiError::BadRequest(MISSING_LOCATIONS.to_string()));
    };

    state
        .route_service
        .quote_by_coordinates(&pickup, &destination)
        .await
        .map(CalculateRouteResponse::from)
        .map_err(|e| ApiError::coordinate_failure(&e))
}
