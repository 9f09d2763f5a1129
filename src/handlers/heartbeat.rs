//! Heartbeat endpoint handler.
//!
//! Returns server status information: instance id, uptime and catalog size.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

use crate::state::AppState;

/// Server ID, generated once per process
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(|| SystemTime::now());

/// Heartbeat response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (RFC 3339, UTC)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Number of cities in the catalog
    pub city_count: usize,
    /// Whether readings come from a seeded, reproducible source
    pub seeded: bool,
    /// Server status
    pub status: String,
}

/// Pin the start time; call once at startup so uptime counts from boot.
pub fn mark_start() {
    once_cell::sync::Lazy::force(&START_TIME);
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Json<HeartbeatResponse> {
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    Json(HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        city_count: state.catalog.len(),
        seeded: state.config.seed.is_some(),
        status: "healthy".to_string(),
    })
}
