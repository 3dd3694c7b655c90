//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod route_point;

pub use coordinate::Coordinate;
pub use route_point::RoutePoint;
