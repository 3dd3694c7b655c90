//! Serving with a bounded graceful shutdown

use std::{io, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves, then give open connections at most
/// `timeout` to finish before returning.
pub async fn serve_with_deadline<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    timeout: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let draining = Arc::new(Notify::new());
    let trigger = Arc::clone(&draining);
    let graceful = async move {
        shutdown.await;
        info!("Waiting up to {timeout:?} for connections to close...");
        trigger.notify_one();
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(graceful)
        .into_future();

    tokio::select! {
        result = server => result,
        () = async {
            draining.notified().await;
            tokio::time::sleep(timeout).await;
        } => {
            warn!("Shutdown deadline of {timeout:?} reached, dropping open connections");
            Ok(())
        },
    }
}
