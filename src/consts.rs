//! Shared numeric constants for the rubberbox crate.

// ── Box sizing ──────────────────────────────────────────────────

/// Box side length as a fraction of the viewport diagonal.
pub const BOX_SIZE_RATIO: f64 = 0.3;

/// Segments each edge is subdivided into when sampling boundary points.
pub const SEGMENTS_PER_EDGE: u32 = 3;

// ── Interaction ─────────────────────────────────────────────────

/// Dragging past this multiple of the box size from center forces a release.
pub const RELEASE_DISTANCE_RATIO: f64 = 1.3;

// ── Spring-back ─────────────────────────────────────────────────

/// Duration of the spring-back animation in milliseconds.
pub const SPRING_BACK_DURATION_MS: f64 = 400.0;

/// Elastic-out oscillation period (in normalized time).
pub const ELASTIC_PERIOD: f64 = 0.1;

// ── Rendering ───────────────────────────────────────────────────

/// Target frame rate for the render throttle.
pub const TARGET_FPS: f64 = 60.0;

/// Stroke width for the box and badge outlines, in device pixels.
pub const STROKE_WIDTH: f64 = 5.0;

/// Badge corner radius (and inset gap) as a fraction of the box size.
pub const BADGE_GAP_RATIO: f64 = 0.09;

/// Label font size as a fraction of the box size.
pub const LABEL_FONT_RATIO: f64 = 0.09;

/// Small fixed offset nudging the label toward the lower right, in pixels.
pub const LABEL_NUDGE: f64 = 2.0;
