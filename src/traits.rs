//! Provider seams for the remote services the planner consumes.
//!
//! These are intentionally minimal. Concrete HTTP adapters live in
//! `routing` and `geocode`; tests substitute in-memory implementations.

use crate::coord::Coordinate;

/// Point-to-point routing between two coordinates.
pub trait RoutingService {
    /// Line geometry of the best route from `from` to `to`.
    ///
    /// `profile` is an opaque routing profile forwarded verbatim to the
    /// service. An empty geometry means "no route found" and fails the
    /// routing cycle that requested it.
    fn route(
        &self,
        from: Coordinate,
        to: Coordinate,
        profile: &str,
    ) -> Result<Vec<Coordinate>, RouteError>;
}

/// Forward and reverse geocoding.
pub trait Geocoder {
    /// Ranked places matching a free-text query.
    fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError>;

    /// Human-readable address label for a coordinate.
    fn reverse(&self, coordinate: Coordinate) -> Result<String, GeocodeError>;
}

/// Serialization of a finished path to a track file payload.
///
/// The payload format (GPX or similar) is the exporter's concern; the
/// planner only hands over the stitched coordinate sequence.
pub trait TrackExporter {
    fn export(&self, path: &[Coordinate]) -> Vec<u8>;
}

/// A geocoding search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub label: String,
    pub coordinate: Coordinate,
}

/// Failure of a routing request or routing cycle.
#[derive(Debug)]
pub enum RouteError {
    /// Transport or HTTP status failure.
    Http(reqwest::Error),
    /// The service answered but reported an error payload.
    Service(String),
    /// The service returned an empty geometry for the pair at this index.
    NoRoute { pair: usize },
}

impl From<reqwest::Error> for RouteError {
    fn from(err: reqwest::Error) -> Self {
        RouteError::Http(err)
    }
}

/// Failure of a geocoding lookup.
#[derive(Debug)]
pub enum GeocodeError {
    Http(reqwest::Error),
    /// The service answered with a payload we could not interpret.
    Malformed(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Http(err)
    }
}
