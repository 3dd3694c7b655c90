//! Coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A latitude/longitude pair as exchanged with API clients (`{ "lat", "lng" }`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    lat: f64,
    /// Longitude in degrees
    lng: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting values outside the valid ranges
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        let coordinate = Self::new_unchecked(lat, lng);
        if !coordinate.is_within_bounds() {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(coordinate)
    }

    /// Create a coordinate without range checks
    ///
    /// Client-supplied coordinates are forwarded to the routing provider as-is.
    #[must_use]
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Get the latitude
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Get the longitude
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Whether latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Formats as `lat,lng`, the waypoint syntax used in routing URLs
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let c = Coordinate::new(6.5244, 3.3792).expect("valid coordinates");
        assert!((c.lat() - 6.5244).abs() < f64::EPSILON);
        assert!((c.lng() - 3.3792).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Coordinate::new(91.0, 0.0),
            Err(DomainError::InvalidCoordinates)
        );
        assert!(Coordinate::new(0.0, -181.0).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_unchecked_keeps_raw_values() {
        let c = Coordinate::new_unchecked(120.0, 400.0);
        assert!(!c.is_within_bounds());
        assert!((c.lat() - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_is_waypoint_syntax() {
        let c = Coordinate::new_unchecked(6.5244, 3.3792);
        assert_eq!(c.to_string(), "6.5244,3.3792");
    }

    #[test]
    fn test_deserialize_lat_lng() {
        let c: Coordinate = serde_json::from_str(r#"{"lat": 9.0765, "lng": 7.3986}"#).expect("json");
        assert!((c.lat() - 9.0765).abs() < f64::EPSILON);
        assert!((c.lng() - 7.3986).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_missing_field_fails() {
        let result: Result<Coordinate, _> = serde_json::from_str(r#"{"lat": 9.0765}"#);
        assert!(result.is_err());
    }
}
