//! Truckroute HTTP server binary

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::RouteService;
use infrastructure::{AppConfig, TomTomAdapter, init_logging};
use presentation_http::{AppState, create_router, serve_with_deadline};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(config.server.json_logs())?;

    info!("Truckroute v{} starting...", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        request_mode = %config.route.request_mode,
        geometry = %config.route.geometry,
        tomtom = ?config.tomtom,
        "Configuration loaded"
    );

    let adapter = Arc::new(
        TomTomAdapter::from_config(&config.tomtom, config.route.geometry)
            .context("Failed to initialize TomTom clients")?,
    );
    let route_service = RouteService::new(adapter.clone(), adapter);

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    let app = create_router(AppState::new(route_service, config));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{addr}");

    serve_with_deadline(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
