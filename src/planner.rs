//! Routing cycle orchestration and marker correlation.
//!
//! A cycle runs whenever the waypoint sequence changes: valid waypoints are
//! decomposed into consecutive pairs, one routing request per pair is issued
//! concurrently, the segments are stitched into a single path, and a
//! viewport reaction is derived. A later cycle supersedes any still-running
//! earlier one; stale results are discarded at commit time.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::bounds::{ViewportChange, viewport_for};
use crate::coord::Coordinate;
use crate::geocode::fallback_label;
use crate::segment::Segment;
use crate::stitch::stitch;
use crate::traits::{GeocodeError, Geocoder, Place, RouteError, RoutingService, TrackExporter};
use crate::waypoint::{Waypoint, Waypoints};

/// Outcome of one routing cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Stitched route geometry; empty when no route is drawn.
    pub path: Vec<Coordinate>,
    /// Viewport reaction for the waypoint set of this cycle.
    pub viewport: ViewportChange,
}

impl RoutePlan {
    /// The cleared state: no route, viewport untouched.
    pub fn cleared() -> Self {
        Self {
            path: Vec::new(),
            viewport: ViewportChange::Unchanged,
        }
    }
}

/// Handle for one routing cycle, used to discard superseded results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleToken {
    generation: u64,
}

/// A marker drag event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDrag {
    /// Position the marker was rendered at before the drag started.
    pub reference: Coordinate,
    /// Position the marker was released at.
    pub position: Coordinate,
}

/// Index-addressed waypoint replacement for the state container to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointUpdate {
    pub index: usize,
    pub waypoint: Waypoint,
}

/// Orchestrates routing cycles and marker interaction against the remote
/// services.
///
/// Waypoints stay owned by the caller; the planner reads them and hands
/// back `RoutePlan` and `WaypointUpdate` values to apply.
pub struct RoutePlanner<R, G> {
    routing: R,
    geocoder: G,
    generation: u64,
    plan: RoutePlan,
}

impl<R, G> RoutePlanner<R, G>
where
    R: RoutingService + Sync,
    G: Geocoder + Sync,
{
    pub fn new(routing: R, geocoder: G) -> Self {
        Self {
            routing,
            geocoder,
            generation: 0,
            plan: RoutePlan::cleared(),
        }
    }

    /// The last committed plan.
    pub fn plan(&self) -> &RoutePlan {
        &self.plan
    }

    /// Start a new routing cycle, superseding all earlier ones.
    pub fn begin_cycle(&mut self) -> CycleToken {
        self.generation += 1;
        CycleToken {
            generation: self.generation,
        }
    }

    /// Compute a plan for the given waypoint sequence.
    ///
    /// Fewer than two valid waypoints yield an empty path (clearing any
    /// previously drawn route) and no routing request is issued.
    pub fn compute(&self, waypoints: &Waypoints, profile: &str) -> Result<RoutePlan, RouteError> {
        let coordinates = waypoints.valid_coordinates();
        let viewport = viewport_for(&coordinates);

        if coordinates.len() < 2 {
            return Ok(RoutePlan {
                path: Vec::new(),
                viewport,
            });
        }

        let segments = self.fetch_segments(&coordinates, profile)?;
        Ok(RoutePlan {
            path: stitch(segments),
            viewport,
        })
    }

    /// One routing request per consecutive pair, issued concurrently.
    ///
    /// Results are collected by pair position regardless of completion
    /// order; the first failing pair fails the whole fetch.
    fn fetch_segments(
        &self,
        coordinates: &[Coordinate],
        profile: &str,
    ) -> Result<Vec<Segment>, RouteError> {
        coordinates
            .par_windows(2)
            .enumerate()
            .map(|(pair, window)| {
                let points = self.routing.route(window[0], window[1], profile)?;
                if points.is_empty() {
                    return Err(RouteError::NoRoute { pair });
                }
                Ok(Segment::new(pair, points))
            })
            .collect()
    }

    /// Commit a computed plan, unless a newer cycle has started since the
    /// token was taken. Returns whether the plan was applied.
    pub fn commit(&mut self, token: CycleToken, plan: RoutePlan) -> bool {
        if token.generation != self.generation {
            debug!(
                "discarding superseded routing cycle {} (current {})",
                token.generation, self.generation
            );
            return false;
        }
        self.plan = plan;
        true
    }

    /// Run a full routing cycle: begin, compute, commit.
    ///
    /// On failure the committed route is the cleared state and the error is
    /// returned so the caller can raise its "invalid path" notification.
    pub fn route_waypoints(
        &mut self,
        waypoints: &Waypoints,
        profile: &str,
    ) -> Result<&RoutePlan, RouteError> {
        let token = self.begin_cycle();
        match self.compute(waypoints, profile) {
            Ok(plan) => {
                self.commit(token, plan);
                Ok(&self.plan)
            }
            Err(err) => {
                warn!("routing cycle failed: {:?}", err);
                self.commit(token, RoutePlan::cleared());
                Err(err)
            }
        }
    }

    /// Resolve a dragged marker to the waypoint it stands for and move it
    /// there.
    ///
    /// `None` when no waypoint has a coordinate to correlate against; the
    /// drag is then dropped without touching any state.
    pub fn drag_marker(&self, waypoints: &Waypoints, drag: MarkerDrag) -> Option<WaypointUpdate> {
        let index = correlate_marker(waypoints, drag.reference)?;
        Some(self.place_waypoint(index, drag.position))
    }

    /// Assign a map position to the waypoint slot at `index`.
    ///
    /// The coordinate takes effect immediately; the name comes from reverse
    /// geocoding, falling back to a coordinate-string label when the lookup
    /// fails.
    pub fn place_waypoint(&self, index: usize, position: Coordinate) -> WaypointUpdate {
        let name = match self.geocoder.reverse(position) {
            Ok(label) => label,
            Err(err) => {
                warn!("reverse geocoding failed, using coordinate label: {:?}", err);
                fallback_label(position)
            }
        };

        WaypointUpdate {
            index,
            waypoint: Waypoint::new(name, position),
        }
    }

    /// Ranked places for a free-text search query.
    pub fn search_places(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        self.geocoder.search(query)
    }

    /// Serialize the current path through `exporter`; `None` when no route
    /// is drawn.
    pub fn export_track<E: TrackExporter>(&self, exporter: &E) -> Option<Vec<u8>> {
        if self.plan.path.is_empty() {
            return None;
        }
        Some(exporter.export(&self.plan.path))
    }
}

/// Waypoint index a dragged marker belongs to.
///
/// Nearest valid waypoint to the marker's pre-drag reference position by
/// great-circle distance; the strict comparison makes the lower index win
/// ties. Waypoints without a coordinate can never be selected. An empty
/// result is an internal inconsistency (a marker was rendered for a
/// waypoint that no longer exists) and is only logged.
pub fn correlate_marker(waypoints: &Waypoints, reference: Coordinate) -> Option<usize> {
    let mut min_distance = f64::MAX;
    let mut min_index = None;

    for (index, waypoint) in waypoints.iter().enumerate() {
        let Some(coordinate) = waypoint.coordinate else {
            continue;
        };
        let distance = reference.distance_m(coordinate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    if min_index.is_none() {
        warn!(
            "dragged marker at ({}, {}) matches no valid waypoint",
            reference.lat, reference.lon
        );
    }
    min_index
}
