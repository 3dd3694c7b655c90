//! TomTom API response models
//!
//! Only the fields the proxy reads are modelled; everything else in the
//! provider payload is ignored.

use domain::RoutePoint;
use reqwest::StatusCode;
use serde::Deserialize;

// ============================================================================
// Routing API
// ============================================================================

/// Response of `GET /routing/1/calculateRoute/{locations}/json`
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRouteResponse {
    /// Route candidates, best first
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// A single route candidate
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub summary: RouteSummary,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
    #[serde(default)]
    pub sections: Vec<RouteSection>,
}

impl Route {
    /// Points of the first leg
    ///
    /// `None` when the route has no legs; an empty slice when the first leg
    /// carries no points.
    #[must_use]
    pub fn first_leg_points(&self) -> Option<&[RoutePoint]> {
        self.legs.first().map(|leg| leg.points.as_slice())
    }

    /// Encoded polyline of the first section, if the provider sent one
    #[must_use]
    pub fn first_section_polyline(&self) -> Option<&str> {
        self.sections
            .first()
            .and_then(|section| section.polyline.as_deref())
    }
}

/// Route totals
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub length_in_meters: f64,
    pub travel_time_in_seconds: f64,
}

/// A travel segment between two waypoints
#[derive(Debug, Clone, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub points: Vec<RoutePoint>,
}

/// A typed section of a route
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSection {
    #[serde(default)]
    pub section_type: Option<String>,
    #[serde(default)]
    pub polyline: Option<String>,
}

// ============================================================================
// Search API
// ============================================================================

/// Response of `GET /search/2/geocode/{query}.json`
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResult {
    pub position: SearchPosition,
    #[serde(default)]
    pub address: Option<SearchAddress>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchPosition {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchAddress {
    #[serde(default)]
    pub freeform_address: Option<String>,
}

// ============================================================================
// Error payloads
// ============================================================================

/// Error body returned by both APIs on non-2xx responses
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProviderErrorBody {
    #[serde(default)]
    error_text: Option<String>,
    #[serde(default)]
    error: Option<ProviderError>,
    #[serde(default)]
    detailed_error: Option<DetailedError>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailedError {
    #[serde(default)]
    message: Option<String>,
}

impl ProviderErrorBody {
    /// Most specific diagnostic message in the body
    fn diagnostic(&self) -> Option<&str> {
        self.detailed_error
            .as_ref()
            .and_then(|d| d.message.as_deref())
            .or_else(|| self.error.as_ref().and_then(|e| e.description.as_deref()))
            .or(self.error_text.as_deref())
    }
}

/// Describe a failed provider response as `HTTP <status>[: <diagnostic>]`
pub(crate) fn describe_failure(status: StatusCode, body: &str) -> String {
    let parsed: ProviderErrorBody = serde_json::from_str(body).unwrap_or_default();
    match parsed.diagnostic() {
        Some(message) => format!("HTTP {status}: {message}"),
        None => format!("HTTP {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_response_parsing() {
        let json = r#"{
            "formatVersion": "0.0.12",
            "routes": [{
                "summary": { "lengthInMeters": 462000, "travelTimeInSeconds": 21600 },
                "legs": [{ "summary": {}, "points": [
                    { "latitude": 6.5244, "longitude": 3.3792 },
                    { "latitude": 9.0765, "longitude": 7.3986 }
                ]}],
                "sections": [{ "sectionType": "TRAVEL_MODE", "polyline": "abc" }]
            }]
        }"#;
        let response: CalculateRouteResponse = serde_json::from_str(json).unwrap();
        let route = &response.routes[0];
        assert!((route.summary.length_in_meters - 462_000.0).abs() < f64::EPSILON);
        assert_eq!(route.first_leg_points().map(<[_]>::len), Some(2));
        assert_eq!(route.first_section_polyline(), Some("abc"));
    }

    #[test]
    fn test_route_without_legs_or_sections() {
        let json = r#"{ "routes": [{ "summary": { "lengthInMeters": 1, "travelTimeInSeconds": 1 } }] }"#;
        let response: CalculateRouteResponse = serde_json::from_str(json).unwrap();
        assert!(response.routes[0].first_leg_points().is_none());
        assert!(response.routes[0].first_section_polyline().is_none());
    }

    #[test]
    fn test_leg_without_points_is_empty() {
        let json = r#"{ "routes": [{
            "summary": { "lengthInMeters": 1, "travelTimeInSeconds": 1 },
            "legs": [{}]
        }] }"#;
        let response: CalculateRouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.routes[0].first_leg_points(), Some(&[][..]));
    }

    #[test]
    fn test_search_response_parsing() {
        let json = r#"{
            "summary": { "numResults": 1 },
            "results": [{
                "type": "Geography",
                "position": { "lat": 6.45407, "lon": 3.39467 },
                "address": { "freeformAddress": "Lagos, Lagos" }
            }]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        let address = response.results[0].address.as_ref().unwrap();
        assert_eq!(address.freeform_address.as_deref(), Some("Lagos, Lagos"));
    }

    #[test]
    fn test_describe_failure_prefers_detailed_error() {
        let body = r#"{
            "error": { "description": "Invalid request" },
            "detailedError": { "code": "BAD_INPUT", "message": "Unknown travelMode" }
        }"#;
        let msg = describe_failure(StatusCode::BAD_REQUEST, body);
        assert_eq!(msg, "HTTP 400 Bad Request: Unknown travelMode");
    }

    #[test]
    fn test_describe_failure_uses_error_text() {
        let msg = describe_failure(StatusCode::FORBIDDEN, r#"{"errorText": "Developer Inactive"}"#);
        assert_eq!(msg, "HTTP 403 Forbidden: Developer Inactive");
    }

    #[test]
    fn test_describe_failure_without_body() {
        let msg = describe_failure(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(msg, "HTTP 502 Bad Gateway");
    }
}
