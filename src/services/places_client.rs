// src/services/places_client.rs
// DOCUMENTATION: HTTP capability used by the available-places component
// PURPOSE: Issue the GET, unwrap the envelope, honour cancellation

use crate::errors::PlacesError;
use crate::models::{Place, PlacesEnvelope};
use crate::services::CancelToken;
use reqwest::Client;
use std::future::Future;

/// Anything that can produce the list of available places
/// DOCUMENTATION: Implementations must stop work and return
/// `PlacesError::Cancelled` once `cancel` fires
pub trait PlacesSource: Send + Sync + 'static {
    fn fetch_places(
        &self,
        cancel: &CancelToken,
    ) -> impl Future<Output = Result<Vec<Place>, PlacesError>> + Send;
}

/// reqwest-backed places source
/// DOCUMENTATION: One GET per call, no retry and no caching
pub struct HttpPlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Endpoint returning `{ "places": [...] }`
    url: String,
}

impl HttpPlacesClient {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request_places(&self) -> Result<Vec<Place>, PlacesError> {
        log::debug!("GET {}", self.url);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            log::error!("Places request failed: {}", e);
            PlacesError::from(e)
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Places backend error {}: {}", status, body);
            return Err(PlacesError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(|e| {
            log::error!("Failed to read places response: {}", e);
            PlacesError::from(e)
        })?;

        let envelope: PlacesEnvelope = serde_json::from_slice(&bytes).map_err(|e| {
            log::error!("Failed to parse places response: {}", e);
            PlacesError::Decode(e.to_string())
        })?;

        let places = envelope.into_places();
        log::info!("Places backend returned {} places", places.len());
        Ok(places)
    }
}

impl PlacesSource for HttpPlacesClient {
    async fn fetch_places(&self, cancel: &CancelToken) -> Result<Vec<Place>, PlacesError> {
        if cancel.is_cancelled() {
            return Err(PlacesError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("Places request to {} cancelled", self.url);
                Err(PlacesError::Cancelled)
            }
            result = self.request_places() => result,
        }
    }
}
