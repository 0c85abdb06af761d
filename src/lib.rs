//! Rubber-band box: an interactive canvas toy compiled to WebAssembly.
//!
//! A square sits in the middle of the page. Grabbing its inner badge and
//! dragging bends every edge toward the pointer, like pulling on a rubber
//! sheet; letting go springs the box back to rest with one elastic
//! overshoot. The browser layer supplies only plumbing — a sized canvas,
//! pointer events, and an animation-frame callback — while this crate owns
//! all geometry, interaction state, and drawing.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`geometry`] | Box shape, boundary sampling, badge/label math |
//! | [`input`] | Pull state and the drag phase state machine |
//! | [`spring`] | Elastic ease and the spring-back animation |
//! | [`clock`] | Frame throttle with remainder carry-over |
//! | [`hit`] | Grab-region test and the release-distance cap |
//! | [`render`] | Scene drawing against the 2D context |
//! | [`config`] | Scene configuration (colors, label, fps) |
//! | [`consts`] | Shared numeric constants |
//! | [`host`] | DOM wiring: sizing, listeners, frame loop (wasm only) |

pub mod clock;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod hit;
#[cfg(target_arch = "wasm32")]
pub mod host;
pub mod input;
pub mod render;
pub mod spring;
