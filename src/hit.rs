#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::feature::{Feature, FeatureId, Shape};
use crate::geom::Point;

/// A drawn shape that can receive hover and click pass-through.
#[derive(Debug, Clone, PartialEq)]
pub struct HitTarget {
    pub id: FeatureId,
    pub shape: Shape,
    pub weight: f64,
}

impl HitTarget {
    /// The hit target of an interactive feature; `None` for non-interactive ones.
    #[must_use]
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        feature.interactive.then(|| Self {
            id: feature.id,
            shape: feature.shape.clone(),
            weight: feature.weight,
        })
    }

    /// Whether `p` (layer pixels) falls on this shape, within `tolerance` pixels.
    #[must_use]
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        match &self.shape {
            Shape::Circle { center, radius } => p.distance_to(*center) <= radius + tolerance,
            Shape::Path { parts, closed } => {
                let reach = self.weight / 2.0 + tolerance;
                (*closed && inside_rings(parts, p)) || near_stroke(parts, *closed, p, reach)
            }
        }
    }
}

/// The topmost target under `p`: the last one drawn wins.
#[must_use]
pub fn topmost(targets: &[HitTarget], p: Point, tolerance: f64) -> Option<FeatureId> {
    targets.iter().rev().find(|t| t.contains(p, tolerance)).map(|t| t.id)
}

/// Even-odd ray cast across every ring, so holes are excluded.
fn inside_rings(rings: &[Vec<Point>], p: Point) -> bool {
    let mut inside = false;
    for ring in rings {
        let n = ring.len();
        if n < 3 {
            continue;
        }
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (ring[i], ring[j]);
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            j = i;
        }
    }
    inside
}

fn near_stroke(parts: &[Vec<Point>], closed: bool, p: Point, reach: f64) -> bool {
    parts.iter().any(|part| {
        let open = part.windows(2).any(|w| segment_distance(p, w[0], w[1]) <= reach);
        let closing = closed
            && part.len() > 2
            && match (part.first(), part.last()) {
                (Some(&first), Some(&last)) => segment_distance(p, last, first) <= reach,
                _ => false,
            };
        open || closing || (part.len() == 1 && p.distance_to(part[0]) <= reach)
    })
}

/// Distance from `p` to the segment `a`..`b`.
#[must_use]
pub fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let d = b - a;
    let len_sq = d.x * d.x + d.y * d.y;
    if len_sq == 0.0 {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * d.x + (p.y - a.y) * d.y) / len_sq).clamp(0.0, 1.0);
    p.distance_to(a + d * t)
}
