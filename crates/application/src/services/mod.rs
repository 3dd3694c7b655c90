//! Application services

mod route_service;

pub use route_service::{AddressRouteQuote, RouteQuote, RouteService};
