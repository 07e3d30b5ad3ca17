//! Orientation resolution and concatenation of fetched route segments.
//!
//! The routing service guarantees each segment begins or ends near one of
//! its two defining waypoints, but not that its direction agrees with the
//! travel order. Orientation is fixed purely by neighbor comparison; a
//! mid-chain mismatch is left in place and shows up as a gap in the path.

use crate::coord::Coordinate;
use crate::segment::Segment;

/// Resolve segment orientations and concatenate them into one flat path.
///
/// Every input coordinate ends up in the output exactly once; stitching
/// never drops or synthesizes points.
pub fn stitch(mut segments: Vec<Segment>) -> Vec<Coordinate> {
    orient(&mut segments);

    let total = segments.iter().map(Segment::len).sum();
    let mut path = Vec::with_capacity(total);
    for segment in segments {
        path.extend(segment.into_points());
    }
    path
}

/// Flip segments whose direction disagrees with their neighbor.
///
/// The first segment has no predecessor to infer direction from, so its
/// orientation comes from the second: if its starting coordinate touches
/// either end of the second segment, it is facing backwards. Every later
/// segment is compared forward against its already-oriented predecessor
/// only; there is no look-ahead and no backtracking.
fn orient(segments: &mut [Segment]) {
    if segments.len() >= 2 {
        if let (Some(start), Some(next_start), Some(next_end)) =
            (segments[0].first(), segments[1].first(), segments[1].last())
        {
            if start.approx_eq(next_start) || start.approx_eq(next_end) {
                segments[0].reverse();
            }
        }
    }

    for index in 1..segments.len() {
        if let (Some(prev_end), Some(start)) =
            (segments[index - 1].last(), segments[index].first())
        {
            if !prev_end.approx_eq(start) {
                segments[index].reverse();
            }
        }
    }
}
