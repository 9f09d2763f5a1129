//! Service information endpoint handler.

use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::EXAMPLE_QUERY;

pub const SERVICE_NAME: &str = "Weather Microservice";
pub const SERVICE_VERSION: &str = "1.0";

/// Response for GET /
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    /// Route path to human-readable description
    pub endpoints: BTreeMap<String, String>,
    pub example: String,
}

impl ServiceInfo {
    pub fn describe() -> Self {
        let endpoints = [
            (
                "/weather",
                "GET weather data for a city (requires ?city= parameter)",
            ),
            ("/weather/cities", "GET list of available cities"),
            ("/heartbeat", "GET server health and uptime"),
        ]
        .into_iter()
        .map(|(path, description)| (path.to_string(), description.to_string()))
        .collect();

        Self {
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            endpoints,
            example: EXAMPLE_QUERY.to_string(),
        }
    }
}

/// Handle GET / requests
pub async fn index_handler() -> Json<ServiceInfo> {
    debug!(endpoint = "/", "Processing service info request");
    Json(ServiceInfo::describe())
}
