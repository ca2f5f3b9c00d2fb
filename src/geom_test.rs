#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Bounds {
    Bounds::from_corners(Point::new(x0, y0), Point::new(x1, y1))
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn point_distance_pythagorean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(approx_eq(a.distance_to(b), 5.0));
    assert!(approx_eq(b.distance_to(a), 5.0));
}

#[test]
fn point_arithmetic() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(10.0, 20.0);
    assert_eq!(a + b, Point::new(11.0, 22.0));
    assert_eq!(b - a, Point::new(9.0, 18.0));
    assert_eq!(a * 3.0, Point::new(3.0, 6.0));
    assert_eq!(-a, Point::new(-1.0, -2.0));
}

#[test]
fn point_round() {
    assert_eq!(Point::new(1.4, -2.6).round(), Point::new(1.0, -3.0));
}

#[test]
fn point_is_finite() {
    assert!(Point::new(1.0, 2.0).is_finite());
    assert!(!Point::new(f64::NAN, 2.0).is_finite());
    assert!(!Point::new(1.0, f64::INFINITY).is_finite());
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_from_corners_normalizes() {
    let b = rect(10.0, 20.0, 0.0, 5.0);
    assert_eq!(b.min, Point::new(0.0, 5.0));
    assert_eq!(b.max, Point::new(10.0, 20.0));
    assert_eq!(b.width(), 10.0);
    assert_eq!(b.height(), 15.0);
    assert_eq!(b.size(), Point::new(10.0, 15.0));
}

#[test]
fn bounds_overlapping_intersect() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 15.0, 15.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn bounds_touching_edges_intersect() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(10.0, 0.0, 20.0, 10.0);
    assert!(a.intersects(&b));
}

#[test]
fn bounds_disjoint_horizontally() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(10.5, 0.0, 20.0, 10.0);
    assert!(!a.intersects(&b));
}

#[test]
fn bounds_disjoint_vertically() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(0.0, 11.0, 10.0, 20.0);
    assert!(!a.intersects(&b));
}

#[test]
fn bounds_containment_intersects() {
    let outer = rect(0.0, 0.0, 100.0, 100.0);
    let inner = rect(40.0, 40.0, 60.0, 60.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn bounds_contains_point_inclusive() {
    let b = rect(0.0, 0.0, 10.0, 10.0);
    assert!(b.contains(Point::new(0.0, 0.0)));
    assert!(b.contains(Point::new(10.0, 10.0)));
    assert!(b.contains(Point::new(5.0, 5.0)));
    assert!(!b.contains(Point::new(10.1, 5.0)));
}
