//! Scene configuration: colors, label text, and tuning knobs.
//!
//! The host reads an optional JSON blob from the canvas element's
//! `data-config` attribute; missing fields fall back to the defaults below,
//! so an empty or absent blob yields the stock scene.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{SEGMENTS_PER_EDGE, TARGET_FPS};

/// Tunable scene parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Page background color; also used for the badge label.
    pub background: String,
    /// Fill and stroke color for the box and badge.
    pub accent: String,
    /// Text drawn centered on the badge.
    pub label: String,
    /// Font family for the badge label.
    pub font_family: String,
    /// Target frame rate for the render throttle.
    pub fps: f64,
    /// Segments each box edge is subdivided into.
    pub segments_per_edge: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: "#f1f1f1".to_owned(),
            accent: "#F94892".to_owned(),
            label: "Drag this".to_owned(),
            font_family: "Jua, sans-serif".to_owned(),
            fps: TARGET_FPS,
            segments_per_edge: SEGMENTS_PER_EDGE,
        }
    }
}

impl SceneConfig {
    /// Parse a config from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input; the
    /// host logs it and falls back to [`SceneConfig::default`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Milliseconds between rendered frames at the configured rate.
    #[must_use]
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps
    }
}
