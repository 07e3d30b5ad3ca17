//! Test fixtures for the route planner.
//!
//! Provides real Pilsen-area locations (from OpenStreetMap) and mock
//! implementations of the provider traits.

pub mod pilsen_locations;

#[allow(unused_imports)]
pub use pilsen_locations::*;
