//! API error handling
//!
//! Maps application failures to the JSON error bodies returned by
//! `/calculate-route`. Nothing structured beyond `error` and `details`
//! crosses the HTTP boundary.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// `details` hint when the failure came from geocoding
pub const DETAILS_INVALID_ADDRESS: &str = "Invalid address(es)";
/// `details` hint for every other address-mode failure
pub const DETAILS_ROUTING_ISSUE: &str = "Routing issue";
/// Client-facing message for coordinate-mode routing failures
pub const ROUTE_FAILED_MESSAGE: &str = "Failed to calculate route";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request body (400, `error` only)
    #[error("{0}")]
    BadRequest(String),

    /// Address-mode pipeline failure (400, `error` + `details`)
    #[error("{message}")]
    RouteFailed { message: String, details: String },

    /// Coordinate-mode routing failure (500, generic message)
    #[error("Failed to calculate route: {0}")]
    Internal(String),
}

impl ApiError {
    /// Classify an address-mode failure by whether its message mentions geocoding
    pub fn address_failure(err: &ApplicationError) -> Self {
        let message = err.to_string();
        let details = if message.contains("Geocoding") {
            DETAILS_INVALID_ADDRESS
        } else {
            DETAILS_ROUTING_ISSUE
        };
        Self::RouteFailed {
            message,
            details: details.to_string(),
        }
    }

    /// Wrap a coordinate-mode failure; the cause is logged, not returned
    pub fn coordinate_failure(err: &ApplicationError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Which stage failed, for address-mode failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(error) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error,
                    details: None,
                },
            ),
            Self::RouteFailed { message, details } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: message,
                    details: Some(details),
                },
            ),
            Self::Internal(cause) => {
                error!(%cause, "Route calculation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: ROUTE_FAILED_MESSAGE.to_string(),
                        details: None,
                    },
                )
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use domain::DomainError;

    use super::*;

    #[test]
    fn geocoding_message_points_at_addresses() {
        let err = ApiError::address_failure(&ApplicationError::NotFound(
            "Geocoding failed: No location found for address: zzzzinvalid".to_string(),
        ));
        let ApiError::RouteFailed { message, details } = err else {
            unreachable!("expected RouteFailed");
        };
        assert!(message.contains("zzzzinvalid"));
        assert_eq!(details, DETAILS_INVALID_ADDRESS);
    }

    #[test]
    fn other_messages_point_at_routing() {
        let err = ApiError::address_failure(&ApplicationError::NoRouteFound);
        let ApiError::RouteFailed { message, details } = err else {
            unreachable!("expected RouteFailed");
        };
        assert_eq!(message, "No route found");
        assert_eq!(details, DETAILS_ROUTING_ISSUE);
    }

    #[test]
    fn heuristic_is_case_sensitive() {
        let err = ApiError::address_failure(&ApplicationError::ExternalService(
            "geocoding lowercase".to_string(),
        ));
        assert!(matches!(err, ApiError::RouteFailed { ref details, .. } if details == DETAILS_ROUTING_ISSUE));
    }

    #[test]
    fn blank_address_counts_as_routing_issue() {
        let err =
            ApiError::address_failure(&DomainError::invalid_input("Invalid address").into());
        assert!(matches!(err, ApiError::RouteFailed { ref details, .. } if details == DETAILS_ROUTING_ISSUE));
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::address_failure(&ApplicationError::NoRouteFound)
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::coordinate_failure(&ApplicationError::NoRouteFound)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn bad_request_body_has_no_details() {
        let body = serde_json::to_value(ErrorResponse {
            error: "Missing pickup or destination location".to_string(),
            details: None,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": "Missing pickup or destination location" })
        );
    }
}
