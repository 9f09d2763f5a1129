//! Logging utilities for the skycast server.
//!
//! Structured fields (`endpoint`, `request_id`, `duration_us`) are used
//! throughout so logs can be filtered per route.

use tracing::{error, info, warn, Level};

use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use uuid::Uuid;

use crate::catalog::CityCatalog;
use crate::error::SkycastError;

/// Creates the tracing layer for HTTP request/response logging
pub fn create_http_trace_layer() -> TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    let response_formatter = DefaultOnResponse::new()
        .level(Level::DEBUG)
        .latency_unit(LatencyUnit::Micros);

    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(response_formatter)
}

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` wins over `log_level` when set.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log what the catalog holds at startup
pub fn log_catalog_stats(catalog: &CityCatalog) {
    info!(
        operation = "catalog_load",
        city_count = catalog.len(),
        cities = %catalog.names().join(", "),
        "Catalog ready"
    );
}

/// Log an error with context
pub fn log_error(error: &SkycastError, context: &str) {
    error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}

/// Log an error that occurred during request processing.
///
/// Caller mistakes go out at warn, anything else at error.
pub fn log_request_error(
    error: &SkycastError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) {
    let params = params.unwrap_or("none");
    if error.status_code().is_client_error() {
        warn!(
            error = %error,
            endpoint = endpoint,
            request_id = request_id,
            params = params,
            status = error.status_code().as_u16(),
            "Rejected request"
        );
    } else {
        error!(
            error = %error,
            endpoint = endpoint,
            request_id = request_id,
            params = params,
            status = error.status_code().as_u16(),
            "Request processing error"
        );
    }
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
