//! HTTP request handlers for the skycast API.
//!
//! This module contains all the endpoint handlers for the web server.

pub mod cities;
pub mod heartbeat;
pub mod index;
pub mod weather;

pub use cities::cities_handler;
pub use heartbeat::heartbeat_handler;
pub use index::index_handler;
pub use weather::weather_handler;
