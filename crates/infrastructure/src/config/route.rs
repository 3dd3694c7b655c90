//! Route endpoint configuration: accepted request shape and geometry format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which request body `/calculate-route` accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    /// `{ pickupAddress, destinationAddress }`, geocoded before routing
    #[default]
    Address,
    /// `{ pickup: {lat,lng}, destination: {lat,lng} }`, routed directly
    Coordinates,
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => write!(f, "address"),
            Self::Coordinates => write!(f, "coordinates"),
        }
    }
}

/// How route geometry is returned to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryFormat {
    /// `routePoints`: the first leg's points
    #[default]
    Points,
    /// `routePolyline`: the first section's encoded polyline
    Polyline,
}

impl fmt::Display for GeometryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points => write!(f, "points"),
            Self::Polyline => write!(f, "polyline"),
        }
    }
}

/// Route endpoint configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RouteConfig {
    #[serde(default)]
    pub request_mode: RequestMode,

    #[serde(default)]
    pub geometry: GeometryFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_address_with_points() {
        let config = RouteConfig::default();
        assert_eq!(config.request_mode, RequestMode::Address);
        assert_eq!(config.geometry, GeometryFormat::Points);
    }

    #[test]
    fn deserializes_lowercase_names() {
        let config: RouteConfig =
            serde_json::from_str(r#"{"request_mode": "coordinates", "geometry": "polyline"}"#)
                .unwrap();
        assert_eq!(config.request_mode, RequestMode::Coordinates);
        assert_eq!(config.geometry, GeometryFormat::Polyline);
    }

    #[test]
    fn display_matches_serde_names() {
        assert_eq!(RequestMode::Coordinates.to_string(), "coordinates");
        assert_eq!(GeometryFormat::Polyline.to_string(), "polyline");
    }
}
