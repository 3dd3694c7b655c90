//! Route definitions

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, middleware::propagate_request_id, state::AppState};

/// Create the main router with all routes and the HTTP middleware stack
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/calculate-route", post(handlers::route::calculate_route))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(propagate_request_id))
                .layer(cors),
        )
        .with_state(state)
}

/// CORS for the configured origins; an empty list allows any origin
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if server.allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse()
                .inspect_err(|_| warn!(%origin, "Ignoring unparseable CORS origin"))
                .ok()
        })
        .collect();
    cors.allow_origin(origins)
}
