//! Pull state: the coordinate the box bends toward, and the drag phases.
//!
//! One `PullState` exists per scene. Pointer handlers and the spring both
//! mutate it, but always from the single logical thread the host runs
//! callbacks on — there is no locking and none is needed.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::spring::SpringBack;

/// The drag state machine. Idle is both the initial state and the terminal
/// state between drags.
///
/// Each active variant carries the context the controller needs: the drag
/// origin for displacement tracking, or the in-flight spring during release.
#[derive(Debug, Clone, PartialEq)]
pub enum PullPhase {
    /// No interaction; the pull target rests on the box center.
    Idle,
    /// Pointer held down inside the grab region; target tracks displacement.
    Dragging {
        /// Pointer position at the moment the drag started.
        origin: Point,
    },
    /// Pointer released; the spring is easing the target back to center.
    Releasing {
        /// The return animation, stepped once per rendered frame.
        spring: SpringBack,
    },
}

impl Default for PullPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Live pull state for the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct PullState {
    /// Raw pointer position from the most recent event.
    pub pointer: Point,
    /// The coordinate every boundary curve bends toward. Equal to the box
    /// center whenever the phase is `Idle`.
    pub target: Point,
    /// Current drag phase.
    pub phase: PullPhase,
}

impl PullState {
    /// A state at rest on `center`.
    #[must_use]
    pub fn at_rest(center: Point) -> Self {
        Self { pointer: center, target: center, phase: PullPhase::Idle }
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, PullPhase::Dragging { .. })
    }

    /// Whether the spring-back animation is in flight.
    #[must_use]
    pub fn is_releasing(&self) -> bool {
        matches!(self.phase, PullPhase::Releasing { .. })
    }
}
