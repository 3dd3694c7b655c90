//! Application layer - Use cases and orchestration
//!
//! Defines the geocoding and routing ports and the route quoting service that
//! drives them. Adapters in the infrastructure layer implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
