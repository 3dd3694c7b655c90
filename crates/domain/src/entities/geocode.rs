//! Geocoding result entity

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// A free-text address resolved to a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    /// Resolved position
    pub coordinate: Coordinate,
    /// Provider's normalized form of the address
    pub formatted_address: String,
}

impl GeocodeResult {
    #[must_use]
    pub fn new(coordinate: Coordinate, formatted_address: impl Into<String>) -> Self {
        Self {
            coordinate,
            formatted_address: formatted_address.into(),
        }
    }
}
