// src/errors.rs
// DOCUMENTATION: Custom error types for the places fetch
// PURPOSE: Centralized error handling for entire application

use thiserror::Error;

/// The only failure text ever shown to the user
pub const FETCH_FAILED_MESSAGE: &str =
    "Something went wrong fetching the available places. Please try again later.";

/// Application-specific error types
/// DOCUMENTATION: Keeps the failure kind for logging; the view only ever
/// sees `user_message()`
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Backend responded with status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PlacesError {
    /// Message written to the error cell
    /// DOCUMENTATION: Network, 4xx, 5xx and parse failures all collapse here
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for PlacesError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            PlacesError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            PlacesError::Status(status.as_u16())
        } else {
            PlacesError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_collapses_to_one_message() {
        let errors = [
            PlacesError::Transport("connection refused".to_string()),
            PlacesError::Status(500),
            PlacesError::Status(404),
            PlacesError::Decode("expected value".to_string()),
            PlacesError::Cancelled,
        ];

        for e in &errors {
            assert_eq!(e.user_message(), FETCH_FAILED_MESSAGE);
        }
    }

    #[test]
    fn test_display_keeps_detail() {
        assert_eq!(
            PlacesError::Status(503).to_string(),
            "Backend responded with status 503"
        );
    }
}
