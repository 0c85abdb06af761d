#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point / helpers ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn distance_axis_aligned() {
    assert!(approx_eq(distance(Point::new(0.0, 0.0), Point::new(3.0, 0.0)), 3.0));
    assert!(approx_eq(distance(Point::new(0.0, 0.0), Point::new(0.0, 4.0)), 4.0));
}

#[test]
fn distance_pythagorean() {
    assert!(approx_eq(distance(Point::new(1.0, 1.0), Point::new(4.0, 5.0)), 5.0));
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-2.0, 7.0);
    let b = Point::new(13.0, -1.0);
    assert!(approx_eq(distance(a, b), distance(b, a)));
}

#[test]
fn hypotenuse_matches_distance_from_origin() {
    assert!(approx_eq(hypotenuse(3.0, 4.0), 5.0));
    assert!(approx_eq(hypotenuse(0.0, 0.0), 0.0));
}

// --- BoxShape corners ---

#[test]
fn corners_wind_clockwise_from_top_left() {
    let shape = BoxShape::new(10.0, 20.0, 100.0, 50.0, 3);
    let corners = shape.corners();
    assert_eq!(corners[0], Point::new(10.0, 20.0));
    assert_eq!(corners[1], Point::new(110.0, 20.0));
    assert_eq!(corners[2], Point::new(110.0, 70.0));
    assert_eq!(corners[3], Point::new(10.0, 70.0));
}

#[test]
fn center_is_midpoint_of_bounds() {
    let shape = BoxShape::new(10.0, 20.0, 100.0, 50.0, 3);
    assert!(point_approx_eq(shape.center(), Point::new(60.0, 45.0)));
}

#[test]
fn centered_square_is_symmetric_in_viewport() {
    let shape = BoxShape::centered(400.0, 300.0, 100.0, 3);
    assert_eq!(shape.x, 150.0);
    assert_eq!(shape.y, 100.0);
    assert!(point_approx_eq(shape.center(), Point::new(200.0, 150.0)));
}

// --- Boundary sampling ---

#[test]
fn boundary_has_four_n_points() {
    for n in 1..=6 {
        let shape = BoxShape::new(0.0, 0.0, 90.0, 90.0, n);
        assert_eq!(shape.boundary().len(), 4 * n as usize);
    }
}

#[test]
fn each_edge_group_starts_at_its_corner() {
    let n = 3;
    let shape = BoxShape::new(5.0, 7.0, 60.0, 60.0, n);
    let boundary = shape.boundary();
    for (edge, corner) in shape.corners().iter().enumerate() {
        assert_eq!(boundary[edge * n as usize], *corner);
    }
}

#[test]
fn boundary_excludes_edge_end_corners() {
    // With n points per edge at fractions 0/n..(n-1)/n, no point repeats.
    let shape = BoxShape::new(0.0, 0.0, 90.0, 90.0, 3);
    let boundary = shape.boundary();
    for i in 0..boundary.len() {
        for j in (i + 1)..boundary.len() {
            assert_ne!(boundary[i], boundary[j], "duplicate at {i} and {j}");
        }
    }
}

#[test]
fn boundary_points_are_evenly_spaced_along_top_edge() {
    let shape = BoxShape::new(0.0, 0.0, 90.0, 90.0, 3);
    let boundary = shape.boundary();
    assert_eq!(boundary[0], Point::new(0.0, 0.0));
    assert_eq!(boundary[1], Point::new(30.0, 0.0));
    assert_eq!(boundary[2], Point::new(60.0, 0.0));
    assert_eq!(boundary[3], Point::new(90.0, 0.0));
}

#[test]
fn zero_area_box_degenerates_without_error() {
    let shape = BoxShape::new(50.0, 50.0, 0.0, 0.0, 3);
    assert_eq!(shape.boundary().len(), 12);
    for p in shape.boundary() {
        assert!(point_approx_eq(*p, Point::new(50.0, 50.0)));
    }
}

#[test]
fn sample_boundary_is_deterministic() {
    let shape = BoxShape::new(1.0, 2.0, 30.0, 40.0, 4);
    let again = sample_boundary(shape.corners(), 4);
    assert_eq!(shape.boundary(), again.as_slice());
}

// --- Badge frame ---

#[test]
fn badge_at_rest_sits_at_midpoint_toward_center() {
    // Box at (0,0) size 100; pull at the center (50,50).
    let origin = Point::new(0.0, 0.0);
    let pull = Point::new(50.0, 50.0);
    let frame = badge_frame(origin, pull, 100.0, 100.0, 9.0);
    assert!(approx_eq(frame.x1, 25.0));
    assert!(approx_eq(frame.x2, 34.0));
    assert!(approx_eq(frame.x3, 66.0));
    assert!(approx_eq(frame.x4, 75.0));
    assert!(approx_eq(frame.y1, 25.0));
    assert!(approx_eq(frame.y4, 75.0));
}

#[test]
fn badge_outer_span_is_half_the_box() {
    let frame = badge_frame(Point::new(10.0, 10.0), Point::new(80.0, 60.0), 100.0, 100.0, 9.0);
    assert!(approx_eq(frame.x4 - frame.x1, 50.0));
    assert!(approx_eq(frame.y4 - frame.y1, 50.0));
}

#[test]
fn badge_shifts_at_half_pull_displacement() {
    let origin = Point::new(0.0, 0.0);
    let rest = badge_frame(origin, Point::new(50.0, 50.0), 100.0, 100.0, 9.0);
    let pulled = badge_frame(origin, Point::new(70.0, 50.0), 100.0, 100.0, 9.0);
    // Pull moved +20 in x; the badge moves +10.
    assert!(approx_eq(pulled.x1 - rest.x1, 10.0));
    assert!(approx_eq(pulled.y1 - rest.y1, 0.0));
}

#[test]
fn badge_inner_rails_are_gap_inset() {
    let gap = 4.5;
    let frame = badge_frame(Point::new(0.0, 0.0), Point::new(50.0, 50.0), 100.0, 100.0, gap);
    assert!(approx_eq(frame.x2 - frame.x1, gap));
    assert!(approx_eq(frame.x4 - frame.x3, gap));
    assert!(approx_eq(frame.y2 - frame.y1, gap));
    assert!(approx_eq(frame.y4 - frame.y3, gap));
}

// --- Label anchor ---

#[test]
fn label_anchor_rides_badge_center() {
    let anchor = label_anchor(Point::new(0.0, 0.0), Point::new(50.0, 50.0), 100.0, 100.0);
    // Midpoint (25,25) + quarter box (25,25) + the fixed nudge.
    assert!(approx_eq(anchor.x, 52.0));
    assert!(approx_eq(anchor.y, 52.0));
}

#[test]
fn label_anchor_tracks_pull_at_half_displacement() {
    let origin = Point::new(0.0, 0.0);
    let rest = label_anchor(origin, Point::new(50.0, 50.0), 100.0, 100.0);
    let pulled = label_anchor(origin, Point::new(50.0, 90.0), 100.0, 100.0);
    assert!(approx_eq(pulled.x - rest.x, 0.0));
    assert!(approx_eq(pulled.y - rest.y, 20.0));
}
