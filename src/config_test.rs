#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_colors_match_stock_scene() {
    let config = SceneConfig::default();
    assert_eq!(config.background, "#f1f1f1");
    assert_eq!(config.accent, "#F94892");
}

#[test]
fn default_label_and_tuning() {
    let config = SceneConfig::default();
    assert_eq!(config.label, "Drag this");
    assert_eq!(config.fps, 60.0);
    assert_eq!(config.segments_per_edge, 3);
}

#[test]
fn frame_interval_at_sixty_fps() {
    let config = SceneConfig::default();
    assert!((config.frame_interval_ms() - 1000.0 / 60.0).abs() < 1e-10);
}

#[test]
fn frame_interval_tracks_fps() {
    let config = SceneConfig { fps: 30.0, ..SceneConfig::default() };
    assert!((config.frame_interval_ms() - 1000.0 / 30.0).abs() < 1e-10);
}

#[test]
fn empty_json_yields_defaults() {
    let config = SceneConfig::from_json("{}").unwrap();
    assert_eq!(config, SceneConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = SceneConfig::from_json(r##"{"accent": "#336699", "label": "Pull me"}"##).unwrap();
    assert_eq!(config.accent, "#336699");
    assert_eq!(config.label, "Pull me");
    assert_eq!(config.background, "#f1f1f1");
    assert_eq!(config.segments_per_edge, 3);
}

#[test]
fn full_json_round_trip() {
    let json = r##"{
        "background": "#000000",
        "accent": "#ffffff",
        "label": "Grab",
        "font_family": "monospace",
        "fps": 30.0,
        "segments_per_edge": 5
    }"##;
    let config = SceneConfig::from_json(json).unwrap();
    assert_eq!(config.background, "#000000");
    assert_eq!(config.font_family, "monospace");
    assert_eq!(config.fps, 30.0);
    assert_eq!(config.segments_per_edge, 5);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(SceneConfig::from_json("not json").is_err());
    assert!(SceneConfig::from_json(r#"{"fps": "fast"}"#).is_err());
}
