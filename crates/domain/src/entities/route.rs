//! Route result entity

use serde::{Deserialize, Serialize};

use crate::value_objects::RoutePoint;

/// Shape of the route returned to the client
///
/// Serialized as a single `routePoints` or `routePolyline` entry so it can be
/// flattened into a response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RouteGeometry {
    /// Ordered points of the first route leg
    #[serde(rename = "routePoints")]
    Points(Vec<RoutePoint>),
    /// Encoded polyline of the first route section
    #[serde(rename = "routePolyline")]
    Polyline(String),
}

/// Distance, travel time and geometry of a calculated route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub distance_km: f64,
    pub eta_minutes: f64,
    pub geometry: RouteGeometry,
}

impl RouteResult {
    /// Build a route result from the provider's raw summary units
    #[must_use]
    pub fn from_summary(
        length_in_meters: f64,
        travel_time_in_seconds: f64,
        geometry: RouteGeometry,
    ) -> Self {
        Self {
            distance_km: length_in_meters / 1000.0,
            eta_minutes: travel_time_in_seconds / 60.0,
            geometry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_summary_converts_units() {
        let route = RouteResult::from_summary(462_000.0, 21_600.0, RouteGeometry::Points(vec![]));
        assert!((route.distance_km - 462.0).abs() < f64::EPSILON);
        assert!((route.eta_minutes - 360.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_summary_does_not_round() {
        let route = RouteResult::from_summary(1_500.0, 90.0, RouteGeometry::Polyline(String::new()));
        assert!((route.distance_km - 1.5).abs() < f64::EPSILON);
        assert!((route.eta_minutes - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn geometry_serializes_under_variant_key() {
        let points = serde_json::to_value(RouteGeometry::Points(vec![RoutePoint::new(1.0, 2.0)]))
            .expect("serialize");
        assert_eq!(points["routePoints"][0]["latitude"], 1.0);

        let polyline =
            serde_json::to_value(RouteGeometry::Polyline("_p~iF~ps|U".to_string())).expect("serialize");
        assert_eq!(polyline["routePolyline"], "_p~iF~ps|U");
        assert!(polyline.get("routePoints").is_none());
    }
}
