//! Shutdown signal for the HTTP server.
//!
//! The future returned here is handed to `axum::serve`'s graceful
//! shutdown hook; in-flight requests get `shutdown_timeout` to finish
//! once it resolves.

use std::time::Duration;

use super::TRACING_TARGET_SHUTDOWN;

/// Resolves when the process receives Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal(shutdown_timeout: Duration) {
    tokio::select! {
        () = interrupt() => {},
        () = terminate() => {},
    }

    tracing::info!(
        target: TRACING_TARGET_SHUTDOWN,
        timeout_secs = shutdown_timeout.as_secs(),
        "Shutting down, draining in-flight requests"
    );
}

async fn interrupt() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!(target: TRACING_TARGET_SHUTDOWN, "Received Ctrl+C");
        }
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                %error,
                "Failed to install Ctrl+C handler"
            );
        }
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
            tracing::info!(target: TRACING_TARGET_SHUTDOWN, "Received SIGTERM");
        }
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                %error,
                "Failed to install SIGTERM handler"
            );
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await
}
