// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod place;
pub mod snapshot;

pub use place::*;
pub use snapshot::*;
