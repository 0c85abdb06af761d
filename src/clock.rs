//! Frame throttle: gates rendering to a target rate under rAF jitter.
//!
//! Browsers fire the animation-frame callback at whatever cadence the display
//! allows; the clock skips frames until a full interval has elapsed, then
//! carries the leftover time forward instead of resetting to zero, so the
//! achieved rate does not drift low over long runs.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Elapsed-time gate for the render loop.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl FrameClock {
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, last_ms: None }
    }

    /// Feed a frame timestamp. Returns the elapsed time when a render is due,
    /// `None` when this frame should be skipped.
    ///
    /// The first call only seeds the clock. On a due frame, `last` advances by
    /// `elapsed - (elapsed % interval)` — the remainder is carried into the
    /// next interval.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return None;
        };
        let elapsed = now_ms - last;
        if elapsed < self.interval_ms {
            return None;
        }
        self.last_ms = Some(now_ms - (elapsed % self.interval_ms));
        Some(elapsed)
    }
}
