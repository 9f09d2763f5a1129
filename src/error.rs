//! Error types for the skycast service.
//!
//! Two variants are caller-facing (`MissingParameter`, `UnknownCity`) and map
//! onto 4xx responses with guidance; the rest only occur at startup.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Example query handed back to callers that omit the `city` parameter.
pub const EXAMPLE_QUERY: &str = "/weather?city=New York";

/// The main error type for skycast operations.
#[derive(Error, Debug)]
pub enum SkycastError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },

    /// A catalog entry breaks the profile invariants
    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    /// The `city` query parameter is absent, empty or undecodable
    #[error("City parameter is required")]
    MissingParameter,

    /// The requested city is not in the catalog
    #[error("Weather data not available for {city}")]
    UnknownCity {
        city: String,
        available: Vec<&'static str>,
    },
}

impl SkycastError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SkycastError::MissingParameter => StatusCode::BAD_REQUEST,
            SkycastError::UnknownCity { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SkycastError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            SkycastError::MissingParameter => serde_json::json!({
                "error": self.to_string(),
                "example": EXAMPLE_QUERY,
            }),
            SkycastError::UnknownCity { available, .. } => serde_json::json!({
                "error": self.to_string(),
                "available_cities": available,
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for Results with SkycastError
pub type Result<T> = std::result::Result<T, SkycastError>;
