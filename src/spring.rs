//! Spring-back: elastic-out easing and the polled return animation.
//!
//! The original tween fired a completion callback; here the animation is a
//! plain value stepped once per rendered frame with that frame's elapsed
//! time, and completion is a polled [`SpringBack::is_done`] check. The engine
//! pins the pull target exactly on the resting point when the spring
//! finishes, so easing round-off never leaks into the idle state.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

use std::f64::consts::TAU;

use crate::consts::{ELASTIC_PERIOD, SPRING_BACK_DURATION_MS};
use crate::geometry::Point;

/// Elastic-out ease with amplitude 1 and a short period: one hard overshoot,
/// then a fast settle.
///
/// `elastic_out(0) == 0` and `elastic_out(1) == 1`; between the two the value
/// swings above 1 and decays exponentially.
#[must_use]
pub fn elastic_out(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // Phase shift so the curve leaves exactly from 0 at t = 0.
    let shift = ELASTIC_PERIOD / 4.0;
    (2.0_f64).powf(-10.0 * t) * ((t - shift) * TAU / ELASTIC_PERIOD).sin() + 1.0
}

/// A time-driven interpolation from a released pull point back to rest.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringBack {
    from: Point,
    to: Point,
    elapsed_ms: f64,
    duration_ms: f64,
}

impl SpringBack {
    /// Start a spring from the current pull target back to `to`.
    #[must_use]
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to, elapsed_ms: 0.0, duration_ms: SPRING_BACK_DURATION_MS }
    }

    /// Advance by one frame's elapsed time and return the new pull point.
    pub fn advance(&mut self, dt_ms: f64) -> Point {
        self.elapsed_ms += dt_ms.max(0.0);
        self.current()
    }

    /// The pull point at the current elapsed time.
    #[must_use]
    pub fn current(&self) -> Point {
        let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        let eased = elastic_out(t);
        Point::new(
            self.from.x + (self.to.x - self.from.x) * eased,
            self.from.y + (self.to.y - self.from.y) * eased,
        )
    }

    /// Whether the animation has run its full duration.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// The resting point this spring returns to.
    #[must_use]
    pub fn target(&self) -> Point {
        self.to
    }
}
