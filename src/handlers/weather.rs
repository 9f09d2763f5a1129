//! Weather endpoint handler.
//!
//! Validates the `city` parameter against the catalog and returns a freshly
//! drawn reading for it.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDateTime;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::{Result, SkycastError};
use crate::logging::{generate_request_id, log_request_error};
use crate::reading::WeatherReading;
use crate::state::AppState;

/// Decoded query string as ordered key/value pairs
pub type QueryPairs = Vec<(String, String)>;

/// First `city` value in the query; later repeats are ignored.
pub fn first_city(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "city")
        .map(|(_, value)| value.as_str())
}

/// Handle GET /weather requests
///
/// A query string that fails to decode is treated the same as a missing
/// `city` parameter.
pub async fn weather_handler(
    State(state): State<Arc<AppState>>,
    query: Option<Query<QueryPairs>>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let city = query.as_ref().and_then(|Query(pairs)| first_city(pairs));

    debug!(
        endpoint = "/weather",
        request_id = %request_id,
        city = city.unwrap_or("<none>"),
        "Processing weather request"
    );

    match build_reading(&state, city, chrono::Local::now().naive_local()) {
        Ok(reading) => {
            info!(
                endpoint = "/weather",
                request_id = %request_id,
                city = %reading.city,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Weather request successful"
            );
            Json(reading).into_response()
        }
        Err(error) => {
            log_request_error(
                &error,
                "/weather",
                &request_id,
                Some(&format!("city={:?}", city)),
            );
            error.into_response()
        }
    }
}

/// Validate `city` and draw a reading for it.
///
/// Checks run in a fixed order: a missing or empty name fails before the
/// catalog is consulted.
pub fn build_reading(
    state: &AppState,
    city: Option<&str>,
    now: NaiveDateTime,
) -> Result<WeatherReading> {
    let city = match city {
        Some(city) if !city.is_empty() => city,
        _ => return Err(SkycastError::MissingParameter),
    };

    let profile = state
        .catalog
        .get(city)
        .ok_or_else(|| SkycastError::UnknownCity {
            city: city.to_string(),
            available: state.catalog.names(),
        })?;

    WeatherReading::generate(city, profile, state.random.as_ref(), now)
}
