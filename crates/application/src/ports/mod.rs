//! Ports - Interfaces for external dependencies
//!
//! Adapters implementing these traits live in the infrastructure layer.

mod geocoding_port;
mod routing_port;

pub use geocoding_port::GeocodingPort;
pub use routing_port::RoutingPort;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
