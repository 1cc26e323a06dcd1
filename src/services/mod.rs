// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod available_places;
pub mod cancel;
pub mod places_client;
pub mod state_cell;

#[cfg(test)]
pub mod test_backend;

pub use available_places::*;
pub use cancel::*;
pub use places_client::*;
pub use state_cell::*;
