// src/views/mod.rs
// DOCUMENTATION: Views module organization
// PURPOSE: Re-export presentation components

pub mod places_view;

pub use places_view::render;
