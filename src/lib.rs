//! Core engine of an interactive map route planner.
//!
//! Stitches independently fetched route segments into one ordered,
//! consistently oriented path, and correlates dragged map markers back to
//! the waypoints they represent. The remote routing and geocoding services
//! are consumed through trait seams; blocking HTTP adapters are provided.

pub mod traits;
pub mod planner;
pub mod routing;
pub mod geocode;
pub mod coord;
pub mod waypoint;
pub mod segment;
pub mod stitch;
pub mod bounds;
