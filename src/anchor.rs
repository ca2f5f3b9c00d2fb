//! Anchor points: where a feature's label hangs from.
//!
//! Markers anchor at their projected center. Lines and polygons anchor at the
//! point halfway along the first path, measured in screen pixels, so the
//! anchor follows the visible shape at the current zoom rather than its
//! geographic centroid.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use crate::feature::Shape;
use crate::geom::Point;

/// Resolve the label anchor of a shape. `None` means no label can be drawn.
#[must_use]
pub fn resolve(shape: &Shape) -> Option<Point> {
    match shape {
        Shape::Circle { center, .. } => Some(*center),
        Shape::Path { parts, .. } => parts.first().map(Vec::as_slice).and_then(half_length_point),
    }
}

/// The point at half the total length of `points`, walking vertex to vertex.
///
/// Returns `None` for an empty path and the first vertex when the path's
/// length rounds to zero pixels (a single vertex, or every vertex on the same
/// screen pixel).
#[must_use]
pub fn half_length_point(points: &[Point]) -> Option<Point> {
    let first = *points.first()?;

    let total: f64 = points.windows(2).map(|w| w[0].distance_to(w[1])).sum();
    if total.round() == 0.0 {
        return Some(first);
    }
    let half = total / 2.0;

    let mut walked = 0.0;
    for w in points.windows(2) {
        let (p1, p2) = (w[0], w[1]);
        let segment = p1.distance_to(p2);
        walked += segment;
        if walked > half {
            let ratio = (walked - half) / segment;
            return Some(Point::new(p2.x - ratio * (p2.x - p1.x), p2.y - ratio * (p2.y - p1.y)));
        }
    }

    // Only reachable through float rounding when `walked` lands exactly on `half`
    // at the final vertex.
    points.last().copied()
}
