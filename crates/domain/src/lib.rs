//! Domain layer for the truck route proxy
//!
//! Contains the request-scoped values exchanged between the HTTP layer and the
//! mapping provider: coordinates, geocoding results, route results, and the
//! cost estimate. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod pricing;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use pricing::{COST_PER_KM, estimate_cost};
pub use value_objects::*;
