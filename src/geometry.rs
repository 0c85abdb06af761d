//! Box geometry: corner winding, boundary sampling, and badge/label math.
//!
//! Everything here is a pure function of box bounds and the pull coordinate.
//! The renderer consumes these values verbatim; nothing in this module touches
//! the canvas or mutates shared state.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::LABEL_NUDGE;

/// A point in device-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Diagonal length of a `width` x `height` rectangle.
#[must_use]
pub fn hypotenuse(width: f64, height: f64) -> f64 {
    width.hypot(height)
}

/// The deformable box. Immutable after construction; rebuilt on re-init.
///
/// Corners are wound top-left, top-right, bottom-right, bottom-left. The
/// boundary is the corner sequence with each edge subdivided into equal
/// segments — the ordering is load-bearing, since the renderer connects
/// boundary points in sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    corners: [Point; 4],
    boundary: Vec<Point>,
}

impl BoxShape {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, segments_per_edge: u32) -> Self {
        let corners = [
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ];
        let boundary = sample_boundary(&corners, segments_per_edge);
        Self { x, y, width, height, corners, boundary }
    }

    /// A square of side `size` centered in a `viewport_w` x `viewport_h` viewport.
    #[must_use]
    pub fn centered(viewport_w: f64, viewport_h: f64, size: f64, segments_per_edge: u32) -> Self {
        Self::new(
            (viewport_w - size) / 2.0,
            (viewport_h - size) / 2.0,
            size,
            size,
            segments_per_edge,
        )
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Corners in winding order: top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Subdivided boundary points in winding order.
    #[must_use]
    pub fn boundary(&self) -> &[Point] {
        &self.boundary
    }
}

/// Sample `4 * segments_per_edge` boundary points from the corner ring.
///
/// Each edge contributes points at fractions `0/n .. (n-1)/n`; the end corner
/// is excluded because it opens the next edge, so consecutive edges share no
/// duplicate point. A zero-area box degenerates to overlapping points.
#[must_use]
pub fn sample_boundary(corners: &[Point; 4], segments_per_edge: u32) -> Vec<Point> {
    let mut points = Vec::with_capacity(4 * segments_per_edge as usize);
    for edge in 0..4 {
        let a = corners[edge];
        let b = corners[(edge + 1) % 4];
        for step in 0..segments_per_edge {
            let t = f64::from(step) / f64::from(segments_per_edge);
            points.push(Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t));
        }
    }
    points
}

/// Corner rails of the rounded badge rectangle.
///
/// `x1..x4` run left to right and `y1..y4` top to bottom: `x1/x4` are the
/// outer rails, `x2/x3` the inner rails where the straight runs end and the
/// rounded corners begin (likewise for `y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeFrame {
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
    pub x4: f64,
    pub y1: f64,
    pub y2: f64,
    pub y3: f64,
    pub y4: f64,
}

/// Badge placement for a box whose first corner is `origin`.
///
/// The badge's top-left rides the midpoint between `origin` and `pull`, so it
/// shifts at half the pull displacement; its size is half the box dimensions,
/// with `gap` as both the corner radius and the inset between rails.
#[must_use]
pub fn badge_frame(origin: Point, pull: Point, width: f64, height: f64, gap: f64) -> BadgeFrame {
    let x1 = (origin.x + pull.x) / 2.0;
    let x2 = x1 + gap;
    let x3 = x1 + width / 2.0 - gap;
    let x4 = x3 + gap;
    let y1 = (origin.y + pull.y) / 2.0;
    let y2 = y1 + gap;
    let y3 = y1 + height / 2.0 - gap;
    let y4 = y3 + gap;
    BadgeFrame { x1, x2, x3, x4, y1, y2, y3, y4 }
}

/// Where the badge label is drawn: the badge center, nudged slightly.
#[must_use]
pub fn label_anchor(origin: Point, pull: Point, width: f64, height: f64) -> Point {
    Point::new(
        (origin.x + pull.x) / 2.0 + LABEL_NUDGE + width / 4.0,
        (origin.y + pull.y) / 2.0 + LABEL_NUDGE + height / 4.0,
    )
}
