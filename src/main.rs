//! skycast - simulated weather readings over HTTP
//!
//! This is the main entry point for the skycast server.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use skycast::handlers::heartbeat::mark_start;
use skycast::{build_router, init_tracing, log_catalog_stats, log_error};
use skycast::{AppState, Config, Result, SkycastError};

#[tokio::main]
async fn main() -> Result<()> {
    mark_start();

    // Load configuration before tracing so the configured level applies
    let config = Config::load()?;
    init_tracing(&config.log_level);

    info!("Starting skycast v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    if let Some(seed) = config.seed {
        info!(seed = seed, "Using seeded random source");
    }

    let app_state = AppState::new(config.clone());
    app_state.validate().map_err(|e| {
        log_error(&e, "catalog validation");
        e
    })?;
    log_catalog_stats(app_state.catalog);

    let app = build_router(Arc::new(app_state));

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| SkycastError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| SkycastError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SkycastError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
