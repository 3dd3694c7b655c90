//! Application state shared across handlers

use std::sync::Arc;

use application::RouteService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Geocode, route and price truck trips
    pub route_service: Arc<RouteService>,
    /// Application configuration, fixed for the process lifetime
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(route_service: RouteService, config: AppConfig) -> Self {
        Self {
            route_service: Arc::new(route_service),
            config: Arc::new(config),
        }
    }
}
