use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

/// Resolves on SIGINT or SIGTERM
///
/// Used as the graceful-shutdown future of the HTTP server.
#[cfg(unix)]
pub async fn shutdown_signal() {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to setup SIGTERM handler: {}", e);
            wait_ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => {
            info!("SIGTERM received, initiating graceful shutdown");
        }
        _ = wait_ctrl_c() => {
            info!("SIGINT received, initiating graceful shutdown");
        }
    }
}

/// Windows: Ctrl+C only
#[cfg(not(unix))]
pub async fn shutdown_signal() {
    wait_ctrl_c().await;
    info!("Ctrl+C received, initiating graceful shutdown");
}

async fn wait_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
