//! Rendering: draws the deformed box, badge, and label to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only geometry and
//! the current pull coordinate and produces pixels — it never mutates
//! application state. All coordinates arrive in device pixels; no scaling
//! happens inside draw.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) hands the result
//! to the host.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::SceneConfig;
use crate::consts::{BADGE_GAP_RATIO, LABEL_FONT_RATIO, STROKE_WIDTH};
use crate::geometry::{badge_frame, label_anchor, BoxShape, Point};

/// Draw the full scene: background, deformed box, badge, and label.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    shape: &BoxShape,
    pull: Point,
    config: &SceneConfig,
    viewport_w: f64,
    viewport_h: f64,
    box_size: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear the frame with the background color.
    ctx.set_fill_style_str(&config.background);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    // Layer 2: the rubber box.
    draw_deformed_box(ctx, shape, pull, config);

    // Layer 3: badge and label.
    let gap = box_size * BADGE_GAP_RATIO;
    draw_badge(ctx, shape, pull, config, gap);
    draw_label(ctx, shape, pull, config, box_size)?;

    Ok(())
}

/// Closed path over the boundary points where every segment is a quadratic
/// curve controlled by `pull`.
///
/// Reusing the same control point for all segments is the visual signature of
/// the effect: the whole box bows toward one focal point instead of each edge
/// bowing independently.
fn draw_deformed_box(
    ctx: &CanvasRenderingContext2d,
    shape: &BoxShape,
    pull: Point,
    config: &SceneConfig,
) {
    let boundary = shape.boundary();
    let Some(first) = boundary.first() else {
        return;
    };

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for i in 1..boundary.len() {
        ctx.quadratic_curve_to(pull.x, pull.y, boundary[i].x, boundary[i].y);
    }
    ctx.quadratic_curve_to(pull.x, pull.y, first.x, first.y);

    ctx.set_stroke_style_str(&config.accent);
    ctx.set_line_width(STROKE_WIDTH);
    ctx.stroke();
    ctx.set_fill_style_str(&config.accent);
    ctx.fill();
    ctx.close_path();
}

/// Rounded badge quadrilateral at half the pull displacement.
fn draw_badge(
    ctx: &CanvasRenderingContext2d,
    shape: &BoxShape,
    pull: Point,
    config: &SceneConfig,
    gap: f64,
) {
    let origin = shape.corners()[0];
    let f = badge_frame(origin, pull, shape.width, shape.height, gap);

    ctx.begin_path();
    ctx.move_to(f.x2, f.y1);
    ctx.line_to(f.x3, f.y1);
    ctx.quadratic_curve_to(f.x4, f.y1, f.x4, f.y2);
    ctx.line_to(f.x4, f.y3);
    ctx.quadratic_curve_to(f.x4, f.y4, f.x3, f.y4);
    ctx.line_to(f.x2, f.y4);
    ctx.quadratic_curve_to(f.x1, f.y4, f.x1, f.y3);
    ctx.line_to(f.x1, f.y2);
    ctx.quadratic_curve_to(f.x1, f.y1, f.x2, f.y1);
    ctx.close_path();

    ctx.set_stroke_style_str(&config.accent);
    ctx.set_line_width(STROKE_WIDTH);
    ctx.stroke();
    ctx.set_fill_style_str(&config.accent);
    ctx.fill();
}

/// Centered label riding the badge center.
fn draw_label(
    ctx: &CanvasRenderingContext2d,
    shape: &BoxShape,
    pull: Point,
    config: &SceneConfig,
    box_size: f64,
) -> Result<(), JsValue> {
    let anchor = label_anchor(shape.corners()[0], pull, shape.width, shape.height);
    let font_size = box_size * LABEL_FONT_RATIO;

    ctx.set_font(&format!("{font_size:.0}px {}", config.font_family));
    ctx.set_fill_style_str(&config.background);
    ctx.set_text_align("center");
    ctx.fill_text(&config.label, anchor.x, anchor.y)?;
    Ok(())
}
