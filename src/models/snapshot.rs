// src/models/snapshot.rs
// DOCUMENTATION: Point-in-time view of the component state
// PURPOSE: What the presentation layer reads when rendering

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Place;

/// Linear lifecycle of one fetch: idle -> fetching -> succeeded | failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPhase {
    Idle,
    Fetching,
    Succeeded,
    Failed,
}

impl FetchPhase {
    /// Derive the phase from the three state cells
    pub fn from_cells(places: &Option<Vec<Place>>, is_fetching: bool, error: &str) -> Self {
        if !error.is_empty() {
            FetchPhase::Failed
        } else if places.is_some() {
            FetchPhase::Succeeded
        } else if is_fetching {
            FetchPhase::Fetching
        } else {
            FetchPhase::Idle
        }
    }
}

/// Copy of the three state cells
#[derive(Debug, Clone, Serialize)]
pub struct PlacesSnapshot {
    pub places: Option<Vec<Place>>,
    pub is_fetching: bool,
    pub error: String,
    pub taken_at: DateTime<Utc>,
}

impl PlacesSnapshot {
    pub fn new(places: Option<Vec<Place>>, is_fetching: bool, error: String) -> Self {
        Self {
            places,
            is_fetching,
            error,
            taken_at: Utc::now(),
        }
    }

    pub fn phase(&self) -> FetchPhase {
        FetchPhase::from_cells(&self.places, self.is_fetching, &self.error)
    }
}
