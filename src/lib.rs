//! # skycast
//!
//! A tiny HTTP microservice serving simulated weather readings.
//!
//! The service knows a fixed catalog of cities, each with a temperature band
//! and a set of possible conditions, and answers every weather request with a
//! freshly drawn reading inside that city's profile.
//!
//! ## Routes
//!
//! - `GET /` service description
//! - `GET /weather/cities` the catalog's city names
//! - `GET /weather?city=<name>` a random reading for one city
//! - `GET /heartbeat` liveness and uptime

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod random;
pub mod reading;
pub mod state;

pub use catalog::{CityCatalog, CityProfile};
pub use config::Config;
pub use error::{Result, SkycastError};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_catalog_stats, log_error,
    log_request_error,
};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use reading::{WeatherReading, WeatherReport};
pub use state::AppState;

/// Build the application router over `state`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/weather", get(handlers::weather_handler))
        .route("/weather/cities", get(handlers::cities_handler))
        .route("/heartbeat", get(handlers::heartbeat_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
