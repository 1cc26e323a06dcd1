// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::errors::PlacesError;
use dotenv::dotenv;
use std::env;
use validator::Validate;

pub const DEFAULT_PLACES_URL: &str = "http://localhost:3000/places";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone, Validate)]
pub struct Config {
    /// Endpoint returning the `{ "places": [...] }` envelope
    #[validate(url)]
    pub places_url: String,

    /// Whole-request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub request_timeout: u64,

    /// TCP connect timeout in seconds
    #[validate(range(min = 1, max = 60))]
    pub connect_timeout: u64,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            places_url: lookup("PLACES_API_URL")
                .unwrap_or_else(|| DEFAULT_PLACES_URL.to_string()),

            request_timeout: lookup("REQUEST_TIMEOUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),

            connect_timeout: lookup("CONNECT_TIMEOUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),

            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures the component can be started safely
    pub fn validate(&self) -> Result<(), PlacesError> {
        Validate::validate(self).map_err(|e| PlacesError::InvalidConfig(e.to_string()))?;

        if !self.places_url.starts_with("http://") && !self.places_url.starts_with("https://") {
            return Err(PlacesError::InvalidConfig(format!(
                "PLACES_API_URL must use http or https: {}",
                self.places_url
            )));
        }

        if self.connect_timeout > self.request_timeout {
            log::warn!(
                "CONNECT_TIMEOUT ({}s) exceeds REQUEST_TIMEOUT ({}s)",
                self.connect_timeout,
                self.request_timeout
            );
        }

        Ok(())
    }
}
