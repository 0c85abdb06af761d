//! Hit-testing: the grabbable badge region and the release-distance cap.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::RELEASE_DISTANCE_RATIO;
use crate::geometry::{distance, BoxShape, Point};

/// Whether `p` falls strictly inside the central grab region.
///
/// The region is the middle half of the box in both axes — a quarter-extent
/// margin on each side — so only the inset badge area starts a drag, not the
/// full box bounds.
#[must_use]
pub fn grab_region_contains(shape: &BoxShape, p: Point) -> bool {
    let left = shape.x + shape.width / 4.0;
    let top = shape.y + shape.height / 4.0;
    p.x > left && p.x < left + shape.width / 2.0 && p.y > top && p.y < top + shape.height / 2.0
}

/// Whether the live pointer has strayed far enough from `center` to force a
/// release.
///
/// This caps how far the deformation can stretch and recovers the state
/// machine if a pointer-up event is lost.
#[must_use]
pub fn beyond_release_distance(pointer: Point, center: Point, box_size: f64) -> bool {
    distance(pointer, center) > box_size * RELEASE_DISTANCE_RATIO
}
