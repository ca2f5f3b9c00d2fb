#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// LabelOptions defaults
// =============================================================

#[test]
fn label_defaults_enable_collision() {
    assert!(LabelOptions::default().collision);
}

#[test]
fn label_defaults_halo_and_fill() {
    let o = LabelOptions::default();
    assert_eq!(o.text_border_weight, 2.0);
    assert_eq!(o.text_border_color, "black");
    assert_eq!(o.text_weight, 4.0);
    assert_eq!(o.text_color, "white");
    assert_eq!(o.font, "14px sans");
}

#[test]
fn label_defaults_layout() {
    let o = LabelOptions::default();
    assert_eq!(o.z_index, 600);
    assert_eq!(o.offset, LabelOffset { x: 8.0, y: 5.0 });
    assert_eq!(o.padding, 0.1);
    assert_eq!(o.click_tolerance, 0.0);
}

#[test]
fn offset_converts_to_point() {
    let p: Point = LabelOffset { x: 3.0, y: -4.0 }.into();
    assert_eq!(p, Point::new(3.0, -4.0));
}

// =============================================================
// LabelOptions::from_json
// =============================================================

#[test]
fn from_json_empty_object_is_default() {
    let o = LabelOptions::from_json("{}").unwrap();
    assert_eq!(o, LabelOptions::default());
}

#[test]
fn from_json_partial_override() {
    let o = LabelOptions::from_json(r#"{"collision": false, "offset": {"x": 10, "y": 5}}"#).unwrap();
    assert!(!o.collision);
    assert_eq!(o.offset, LabelOffset { x: 10.0, y: 5.0 });
    assert_eq!(o.font, "14px sans");
}

#[test]
fn from_json_full_override() {
    let json = r##"{
        "collision": true,
        "text_border_weight": 3,
        "text_border_color": "#222",
        "text_weight": 1,
        "text_color": "#ff0",
        "font": "12px serif",
        "z_index": 450,
        "offset": {"x": 0, "y": 0},
        "padding": 0.25,
        "click_tolerance": 3
    }"##;
    let o = LabelOptions::from_json(json).unwrap();
    assert_eq!(o.text_border_weight, 3.0);
    assert_eq!(o.text_border_color, "#222");
    assert_eq!(o.text_color, "#ff0");
    assert_eq!(o.font, "12px serif");
    assert_eq!(o.z_index, 450);
    assert_eq!(o.padding, 0.25);
    assert_eq!(o.click_tolerance, 3.0);
}

#[test]
fn from_json_malformed_is_config_error() {
    let err = LabelOptions::from_json("{not json").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn from_json_wrong_type_is_config_error() {
    let err = LabelOptions::from_json(r#"{"collision": "yes"}"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn from_json_negative_border_rejected() {
    let err = LabelOptions::from_json(r#"{"text_border_weight": -1}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidOption { name: "text_border_weight", .. }));
}

#[test]
fn from_json_blank_font_rejected() {
    let err = LabelOptions::from_json(r#"{"font": "   "}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidOption { name: "font", .. }));
}

#[test]
fn validate_rejects_non_finite_offset() {
    let o = LabelOptions { offset: LabelOffset { x: f64::NAN, y: 0.0 }, ..LabelOptions::default() };
    let err = o.validate().unwrap_err();
    assert!(matches!(err, Error::InvalidOption { name: "offset", .. }));
}

#[test]
fn invalid_option_message_names_field() {
    let err = LabelOptions::from_json(r#"{"padding": -0.5}"#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("padding"));
    assert!(msg.contains("-0.5"));
}

// =============================================================
// MapOptions
// =============================================================

#[test]
fn map_defaults() {
    let o = MapOptions::default();
    assert_eq!(o.center, LatLng::new(-22.68, 118.35));
    assert_eq!(o.zoom, 7.0);
    assert_eq!(o.pointer_throttle_ms, 32.0);
    assert_eq!(o.labels.offset, LabelOffset { x: 10.0, y: 5.0 });
    assert!(o.validate().is_ok());
}

#[test]
fn map_from_json_nested_labels() {
    let o = MapOptions::from_json(r#"{"zoom": 9, "labels": {"collision": false}}"#).unwrap();
    assert_eq!(o.zoom, 9.0);
    assert!(!o.labels.collision);
}

#[test]
fn map_center_outside_bounds_rejected() {
    let err = MapOptions::from_json(r#"{"center": {"lat": 51.5, "lng": -0.1}}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidOption { name: "center", .. }));
}

#[test]
fn map_invalid_nested_label_rejected() {
    let err = MapOptions::from_json(r#"{"labels": {"text_weight": -2}}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidOption { name: "text_weight", .. }));
}
