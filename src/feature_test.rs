#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn circle_defaults_to_interactive_without_label() {
    let f = Feature::circle(1, Point::new(3.0, 4.0), 5.0);
    assert!(f.interactive);
    assert_eq!(f.weight, 1.0);
    assert_eq!(f.label_text(), None);
    assert_eq!(f.fill_color, None);
}

#[test]
fn paths_default_to_heavier_stroke() {
    let line = Feature::polyline(1, vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
    let poly = Feature::polygon(2, vec![vec![Point::new(0.0, 0.0)]]);
    assert_eq!(line.weight, 3.0);
    assert!(matches!(line.shape, Shape::Path { closed: false, .. }));
    assert!(matches!(poly.shape, Shape::Path { closed: true, .. }));
}

#[test]
fn builders_set_style() {
    let f = Feature::circle(1, Point::default(), 5.0)
        .with_label("Roebourne")
        .with_text_color("#ff0")
        .with_fill_color("#4daf4a")
        .with_weight(2.0)
        .with_interactive(false);
    assert_eq!(f.label_text(), Some("Roebourne"));
    assert_eq!(f.text_color.as_deref(), Some("#ff0"));
    assert_eq!(f.fill_color.as_deref(), Some("#4daf4a"));
    assert_eq!(f.weight, 2.0);
    assert!(!f.interactive);
}

#[test]
fn empty_label_reads_as_none() {
    let f = Feature::circle(1, Point::default(), 5.0).with_label("");
    assert_eq!(f.label, Some(String::new()));
    assert_eq!(f.label_text(), None);
}
