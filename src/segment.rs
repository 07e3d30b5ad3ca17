//! Route segment: the line geometry fetched for one waypoint pair.

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

/// Raw output of one pairwise routing request.
///
/// Stores the decoded coordinate sequence together with the index of the
/// waypoint pair it was computed for, so concurrently fetched segments can
/// be re-joined by pair position instead of arrival order. Lives for one
/// routing cycle; the only mutation is the whole-segment reversal applied
/// during orientation resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pair_index: usize,
    points: Vec<Coordinate>,
}

impl Segment {
    pub fn new(pair_index: usize, points: Vec<Coordinate>) -> Self {
        Self { pair_index, points }
    }

    /// Index of the consecutive waypoint pair this segment was fetched for.
    pub fn pair_index(&self) -> usize {
        self.pair_index
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the segment and returns the owned coordinate sequence.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    /// Reverse the travel direction of the segment in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }
}
