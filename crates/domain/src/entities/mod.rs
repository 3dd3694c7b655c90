//! Entities - request-scoped results produced by the mapping provider

mod geocode;
mod route;

pub use geocode::GeocodeResult;
pub use route::{RouteGeometry, RouteResult};
