//! Common test utilities for skycast.
//!
//! This module provides shared utilities for testing the skycast server.
#![allow(dead_code)]

pub mod assertions;
pub mod http_client;

use std::net::SocketAddr;
use std::sync::Arc;

use skycast::{build_router, AppState, Config};

/// Start a server on an ephemeral local port and return its address.
///
/// The server task lives until the test runtime shuts down.
pub async fn spawn_server(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let app = build_router(Arc::new(state));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    addr
}

/// Start a server with the default configuration.
pub async fn spawn_default_server() -> SocketAddr {
    spawn_server(AppState::new(Config::default())).await
}
