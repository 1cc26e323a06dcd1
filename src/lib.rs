// src/lib.rs
// DOCUMENTATION: Library root
// PURPOSE: Expose the component, its collaborators and the view to the binary

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod views;
