//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod tomtom_adapter;

pub use tomtom_adapter::TomTomAdapter;
