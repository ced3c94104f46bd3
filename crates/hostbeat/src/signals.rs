//! Termination signal handling

use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Cancel the token when SIGINT or SIGTERM arrives
///
/// Spawned next to the agent loop; the loop observes the token between ticks
/// and shuts down before the next sample.
pub async fn cancel_on_signal(token: CancellationToken) {
    tokio::select! {
        () = wait_ctrl_c() => {}
        () = wait_sigterm() => {}
    }
    token.cancel();
}

async fn wait_ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C");
}

#[cfg(unix)]
async fn wait_sigterm() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
            info!("received SIGTERM");
        }
        Err(e) => {
            warn!(error = %e, "failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_sigterm() {
    std::future::pending::<()>().await;
}
