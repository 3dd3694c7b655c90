//! TomTom integration for truckroute
//!
//! Provides address geocoding via the
//! [TomTom Search API](https://developer.tomtom.com/search-api/documentation) and
//! truck route calculation via the
//! [TomTom Routing API](https://developer.tomtom.com/routing-api/documentation).
//!
//! # Architecture
//!
//! [`GeocodingClient`] and [`RoutingClient`] define the interfaces, implemented by
//! [`TomTomGeocodingClient`] and [`TomTomRoutingClient`]. Both share a single
//! [`TomTomConfig`] carrying the API key and base URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_tomtom::{RoutingClient, TomTomConfig, TomTomRoutingClient};
//!
//! let config = TomTomConfig::default().with_api_key("my-key");
//! let client = TomTomRoutingClient::new(&config)?;
//!
//! let route = client.calculate_route(
//!     6.5244, 3.3792, // Lagos
//!     9.0765, 7.3986, // Abuja
//! ).await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{RoutingClient, TomTomRoutingClient};
pub use config::TomTomConfig;
pub use error::TomTomError;
pub use geocoding::{GeocodingClient, GeocodingError, TomTomGeocodingClient};
pub use models::{CalculateRouteResponse, Route, RouteLeg, RouteSection, RouteSummary};
