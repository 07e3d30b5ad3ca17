//! Waypoint sequence and its index-addressed edit operations.

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

/// A user-placed route point with an optional resolved location.
///
/// `coordinate` stays `None` until the point has been assigned a location by
/// search, map click, or drag. Only waypoints with a coordinate take part in
/// routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub coordinate: Option<Coordinate>,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate: Some(coordinate),
        }
    }

    /// An unset waypoint: empty name, no coordinate.
    pub fn unset() -> Self {
        Self {
            name: String::new(),
            coordinate: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.coordinate.is_some()
    }
}

/// Ordered waypoint sequence; the order is the travel order.
///
/// The sequence is owned by the application state container. The planner
/// only reads it and emits `WaypointUpdate` values, which the container
/// applies through these operations. Out-of-range indices are ignored
/// rather than panicking, matching the forgiving splice semantics the UI
/// relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoints(Vec<Waypoint>);

impl Default for Waypoints {
    fn default() -> Self {
        Self::new()
    }
}

impl Waypoints {
    /// A fresh sequence: two unset slots, one for the start and one for the
    /// destination.
    pub fn new() -> Self {
        Self(vec![Waypoint::unset(), Waypoint::unset()])
    }

    pub fn from_vec(waypoints: Vec<Waypoint>) -> Self {
        Self(waypoints)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.0.iter()
    }

    /// Insert `waypoint` before `index`; past-the-end indices append.
    pub fn insert(&mut self, index: usize, waypoint: Waypoint) {
        let index = index.min(self.0.len());
        self.0.insert(index, waypoint);
    }

    /// Append `waypoint` at the end of the sequence.
    pub fn push(&mut self, waypoint: Waypoint) {
        self.0.push(waypoint);
    }

    /// Remove the waypoint at `index`.
    pub fn delete(&mut self, index: usize) {
        if index < self.0.len() {
            self.0.remove(index);
        }
    }

    /// Replace the waypoint at `index`.
    pub fn update(&mut self, index: usize, waypoint: Waypoint) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = waypoint;
        }
    }

    /// Reset the waypoint at `index` to unset, keeping its slot.
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = Waypoint::unset();
        }
    }

    /// Coordinates of all valid waypoints, in travel order.
    pub fn valid_coordinates(&self) -> Vec<Coordinate> {
        self.0
            .iter()
            .filter_map(|waypoint| waypoint.coordinate)
            .collect()
    }
}
