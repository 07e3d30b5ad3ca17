//! Real Pilsen-area locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. The application's default map
//! view centers on Pilsen, so test routes do too.

use route_planner::coord::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

// ============================================================================
// City center landmarks (good for short multi-leg routes)
// ============================================================================

pub const LANDMARKS: &[Location] = &[
    Location::new("Republic Square", 49.7475, 13.3776),
    Location::new("Cathedral of St. Bartholomew", 49.7478, 13.3784),
    Location::new("Great Synagogue", 49.7480, 13.3720),
    Location::new("Pilsner Urquell Brewery", 49.7470, 13.3874),
    Location::new("Main Railway Station", 49.7431, 13.3861),
    Location::new("Techmania Science Center", 49.7369, 13.3666),
];

// ============================================================================
// Wider area (longer legs, distinct bounding boxes)
// ============================================================================

pub const OUTSKIRTS: &[Location] = &[
    Location::new("Pilsen Zoo", 49.7585, 13.3607),
    Location::new("University of West Bohemia", 49.7262, 13.3516),
    Location::new("Bolevak Pond", 49.7760, 13.3928),
    Location::new("Radyne Castle", 49.6886, 13.4582),
];
