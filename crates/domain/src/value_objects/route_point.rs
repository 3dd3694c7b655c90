//! Route point value object

use serde::{Deserialize, Serialize};

/// A single point along a route geometry
///
/// Keeps the provider's `{ "latitude", "longitude" }` shape so clients can feed
/// the array straight into a map polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl RoutePoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_provider_field_names() {
        let json = serde_json::to_value(RoutePoint::new(6.5, 3.4)).expect("serialize");
        assert_eq!(json["latitude"], 6.5);
        assert_eq!(json["longitude"], 3.4);
    }
}
