//! City listing endpoint handler.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::state::AppState;

/// Response for GET /weather/cities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityList {
    pub available_cities: Vec<String>,
}

/// Handle GET /weather/cities requests
pub async fn cities_handler(State(state): State<Arc<AppState>>) -> Json<CityList> {
    let available_cities: Vec<String> = state
        .catalog
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();

    debug!(
        endpoint = "/weather/cities",
        city_count = available_cities.len(),
        "Listing cities"
    );

    Json(CityList { available_cities })
}
