use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::router::app_router;
use crate::state::AppState;
use crate::storage::Storage;

/// Start the HTTP server and serve until Ctrl-C.
pub async fn start_server(config: &Config, storage: Arc<dyn Storage>) -> anyhow::Result<()> {
    let state = AppState::new(storage, config.profile.clone());
    let app = app_router(state);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let port = config.server.port;
    info!(%addr, "HTTP server listening");
    println!("🚀 HTTP server running on http://localhost:{port}");
    println!("💚 Health check: http://localhost:{port}/health");
    println!("📚 Courses:      http://localhost:{port}/courses");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        // Without a signal handler, run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
