//! Top-level engine: owns scene state and runs the drag state machine.
//!
//! `EngineCore` holds everything that does not depend on the canvas element,
//! so the whole interaction model is testable without WASM or a browser.
//! `Engine` wraps it with the canvas element and its 2D context and is what
//! the host drives.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::clock::FrameClock;
use crate::config::SceneConfig;
use crate::consts::BOX_SIZE_RATIO;
use crate::geometry::{hypotenuse, BoxShape, Point};
use crate::hit;
use crate::input::{PullPhase, PullState};
use crate::render;
use crate::spring::SpringBack;

/// Actions returned from input handlers for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set the CSS cursor on the canvas element.
    SetCursor(String),
}

fn set_cursor(value: &str) -> Vec<Action> {
    vec![Action::SetCursor(value.to_owned())]
}

/// Core engine state — all logic that doesn't depend on the canvas element.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub config: SceneConfig,
    pub shape: BoxShape,
    pub pull: PullState,
    clock: FrameClock,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    /// Box side length, also the scale for the release cap and badge metrics.
    pub box_size: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        let clock = FrameClock::new(config.frame_interval_ms());
        let shape = BoxShape::centered(0.0, 0.0, 0.0, config.segments_per_edge);
        let pull = PullState::at_rest(shape.center());
        Self {
            config,
            shape,
            pull,
            clock,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            box_size: 0.0,
        }
    }

    /// Full re-init against new device-pixel viewport dimensions.
    ///
    /// Box bounds, boundary points, the release threshold, and the pull state
    /// are all recomputed together; resize never patches partial state, so no
    /// stale-geometry combination can exist afterwards.
    pub fn set_viewport(&mut self, width_px: f64, height_px: f64, dpr: f64) {
        self.viewport_width = width_px;
        self.viewport_height = height_px;
        self.dpr = dpr;
        self.box_size = hypotenuse(width_px, height_px) * BOX_SIZE_RATIO;
        self.shape =
            BoxShape::centered(width_px, height_px, self.box_size, self.config.segments_per_edge);
        self.pull = PullState::at_rest(self.shape.center());
    }

    // --- Input events ---

    /// Pointer pressed at `p` (device pixels).
    ///
    /// Only an `Idle` engine starts a drag: a second pointer while dragging
    /// and a press during the spring-back are both ignored. The press must
    /// also land inside the central grab region.
    pub fn on_pointer_down(&mut self, p: Point) -> Vec<Action> {
        if !matches!(self.pull.phase, PullPhase::Idle) {
            return Vec::new();
        }
        if !hit::grab_region_contains(&self.shape, p) {
            return Vec::new();
        }
        self.pull.pointer = p;
        self.pull.phase = PullPhase::Dragging { origin: p };
        set_cursor("grabbing")
    }

    /// Pointer moved to `p` while the host has drag listeners attached.
    ///
    /// The target tracks displacement from the drag origin, re-anchored on
    /// the box center, so the pull point is independent of where inside the
    /// grab region the drag began. Straying past the release cap forces the
    /// release within this same call.
    pub fn on_pointer_move(&mut self, p: Point) -> Vec<Action> {
        let PullPhase::Dragging { origin } = &self.pull.phase else {
            return Vec::new();
        };
        let origin = *origin;
        self.pull.pointer = p;
        let center = self.shape.center();
        self.pull.target = Point::new(center.x + (p.x - origin.x), center.y + (p.y - origin.y));
        if hit::beyond_release_distance(p, center, self.box_size) {
            return self.release();
        }
        Vec::new()
    }

    /// Pointer released.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.pull.is_dragging() {
            self.release()
        } else {
            Vec::new()
        }
    }

    fn release(&mut self) -> Vec<Action> {
        let center = self.shape.center();
        self.pull.phase =
            PullPhase::Releasing { spring: SpringBack::new(self.pull.target, center) };
        set_cursor("default")
    }

    // --- Frame ---

    /// Feed an animation-frame timestamp. Returns whether a render is due.
    ///
    /// On a due frame, an in-flight spring advances by the frame's elapsed
    /// time; when it completes, the target is pinned exactly on center and
    /// the phase returns to `Idle`.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(elapsed) = self.clock.tick(now_ms) else {
            return false;
        };
        if let PullPhase::Releasing { spring } = &mut self.pull.phase {
            self.pull.target = spring.advance(elapsed);
            if spring.is_done() {
                self.pull.target = spring.target();
                self.pull.phase = PullPhase::Idle;
            }
        }
        true
    }

    // --- Queries ---

    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        self.shape.center()
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pull.is_dragging()
    }
}

/// The full engine. Wraps `EngineCore` and owns the canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the element cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: SceneConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new(config) })
    }

    /// Resize the backing store to device pixels and re-init the scene.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        let width_px = width_css * dpr;
        let height_px = height_css * dpr;
        self.canvas.set_width(width_px as u32);
        self.canvas.set_height(height_px as u32);
        self.core.set_viewport(width_px, height_px, dpr);
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, p: Point) -> Vec<Action> {
        self.core.on_pointer_down(p)
    }

    pub fn on_pointer_move(&mut self, p: Point) -> Vec<Action> {
        self.core.on_pointer_move(p)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    /// Feed a frame timestamp; see [`EngineCore::tick`].
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.core.tick(now_ms)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(
            &self.ctx,
            &self.core.shape,
            self.core.pull.target,
            &self.core.config,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.box_size,
        )
    }
}
