// src/config/http.rs
// DOCUMENTATION: HTTP client initialization
// PURPOSE: Build the shared reqwest client used by the places fetch

use crate::config::Config;
use crate::errors::PlacesError;
use reqwest::Client;
use std::time::Duration;

/// Initialize the HTTP client
/// DOCUMENTATION: Called once during application startup in main.rs
/// Timeouts surface as transport errors, which the component reports as a
/// failed fetch
pub fn init_http_client(config: &Config) -> Result<Client, PlacesError> {
    log::info!(
        "Initializing HTTP client (request timeout: {}s, connect timeout: {}s)",
        config.request_timeout,
        config.connect_timeout
    );

    let client = Client::builder()
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .map_err(|e| PlacesError::InvalidConfig(format!("HTTP client: {}", e)))?;

    Ok(client)
}
