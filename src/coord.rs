//! Coordinate primitives: tolerance equality and great-circle distance.

use serde::{Deserialize, Serialize};

/// Tolerance for coordinate component comparison.
///
/// Floating-point coordinates coming back from the routing service are never
/// bit-identical across requests; two components are considered equal when
/// they differ by no more than this value.
pub const COORD_EPSILON: f64 = 1e-5;

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Component-wise tolerance equality.
    ///
    /// Latitude and longitude are compared independently against
    /// `COORD_EPSILON`, never as a combined distance.
    pub fn approx_eq(self, other: Coordinate) -> bool {
        (self.lat - other.lat).abs() <= COORD_EPSILON
            && (self.lon - other.lon).abs() <= COORD_EPSILON
    }

    /// Great-circle distance to `other` in meters (haversine).
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_M * c
    }
}
