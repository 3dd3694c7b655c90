//! Truckroute HTTP presentation layer
//!
//! Exposes `POST /calculate-route` and `GET /health` over axum.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use server::serve_with_deadline;
pub use state::AppState;
