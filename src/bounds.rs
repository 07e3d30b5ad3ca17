//! Bounding box and viewport fitting for the current waypoint set.

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

/// Zoom level used when centering the viewport on a single point.
pub const SINGLE_POINT_ZOOM: u8 = 16;

/// Minimal axis-aligned rectangle containing a set of coordinates.
///
/// Computed fresh from the valid waypoints of one routing cycle; never
/// persisted beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    /// `None` when `coordinates` is empty.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Option<Self> {
        let first = coordinates.first()?;
        let mut min = *first;
        let mut max = *first;

        for coordinate in &coordinates[1..] {
            if coordinate.lat < min.lat {
                min.lat = coordinate.lat;
            }
            if coordinate.lat > max.lat {
                max.lat = coordinate.lat;
            }
            if coordinate.lon < min.lon {
                min.lon = coordinate.lon;
            }
            if coordinate.lon > max.lon {
                max.lon = coordinate.lon;
            }
        }

        Some(Self { min, max })
    }
}

/// How the map viewport should react to the current waypoint set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewportChange {
    /// No valid waypoints: leave the viewport alone.
    Unchanged,
    /// A single valid waypoint: center on it at a close zoom.
    Center { center: Coordinate, zoom: u8 },
    /// Two or more: fit the rectangle containing all of them.
    Fit(BoundingBox),
}

/// Viewport reaction for the valid waypoint coordinates of one cycle.
pub fn viewport_for(coordinates: &[Coordinate]) -> ViewportChange {
    if coordinates.len() == 1 {
        return ViewportChange::Center {
            center: coordinates[0],
            zoom: SINGLE_POINT_ZOOM,
        };
    }

    match BoundingBox::from_coordinates(coordinates) {
        Some(bounds) => ViewportChange::Fit(bounds),
        None => ViewportChange::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_contains_all_coordinates() {
        let coordinates = vec![
            Coordinate::new(1.0, 1.0),
            Coordinate::new(3.0, 5.0),
            Coordinate::new(-2.0, 4.0),
        ];
        let bounds = BoundingBox::from_coordinates(&coordinates).expect("non-empty input");
        assert_eq!(bounds.min, Coordinate::new(-2.0, 1.0));
        assert_eq!(bounds.max, Coordinate::new(3.0, 5.0));
    }

    #[test]
    fn test_empty_input_has_no_box() {
        assert!(BoundingBox::from_coordinates(&[]).is_none());
    }

    #[test]
    fn test_single_coordinate_box_is_degenerate() {
        let only = Coordinate::new(49.75, 13.38);
        let bounds = BoundingBox::from_coordinates(&[only]).expect("non-empty input");
        assert_eq!(bounds.min, only);
        assert_eq!(bounds.max, only);
    }

    #[test]
    fn test_viewport_unchanged_without_coordinates() {
        assert_eq!(viewport_for(&[]), ViewportChange::Unchanged);
    }

    #[test]
    fn test_viewport_centers_on_single_coordinate() {
        let only = Coordinate::new(49.75, 13.38);
        assert_eq!(
            viewport_for(&[only]),
            ViewportChange::Center {
                center: only,
                zoom: SINGLE_POINT_ZOOM
            }
        );
    }

    #[test]
    fn test_viewport_fits_multiple_coordinates() {
        let coordinates = vec![Coordinate::new(1.0, 1.0), Coordinate::new(3.0, 5.0)];
        match viewport_for(&coordinates) {
            ViewportChange::Fit(bounds) => {
                assert_eq!(bounds.min, Coordinate::new(1.0, 1.0));
                assert_eq!(bounds.max, Coordinate::new(3.0, 5.0));
            }
            other => panic!("expected Fit, got {:?}", other),
        }
    }
}
