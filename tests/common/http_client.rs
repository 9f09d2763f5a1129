//! HTTP client utilities for testing.
//!
//! This module provides helper functions for making HTTP requests to the skycast server during tests.

use reqwest::{Client, Response, Url};
use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;

/// Default timeout for HTTP requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a default test client
pub fn create_test_client() -> Client {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .expect("Failed to build test HTTP client")
}

/// Build a URL for a skycast server endpoint
pub fn build_url(addr: &SocketAddr, path: &str) -> Url {
    format!("http://{}{}", addr, path)
        .parse()
        .expect("Failed to parse URL")
}

/// Make a GET request to the skycast server
pub async fn get(addr: &SocketAddr, path: &str) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    let url = build_url(addr, path);
    Ok(client.get(url).send().await?)
}

/// Make a GET request for one city's weather, letting the client encode the name
pub async fn get_weather(addr: &SocketAddr, city: &str) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    let url = build_url(addr, "/weather");
    Ok(client.get(url).query(&[("city", city)]).send().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let addr: SocketAddr = ([127, 0, 0, 1], 5055).into();
        let url = build_url(&addr, "/weather/cities");
        assert_eq!(url.as_str(), "http://127.0.0.1:5055/weather/cities");
    }
}
