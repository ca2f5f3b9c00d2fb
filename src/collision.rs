//! Label boxes and the first-fit placed-label set.
//!
//! DESIGN
//! ======
//! Each render pass starts from an empty `PlacedLabelSet`. Features are offered
//! in draw order; a candidate box is tested against every box already placed,
//! in insertion order, and the first intersection rejects it. Earlier features
//! always win contested space; there is no priority or size reordering.
//!
//! TRADE-OFFS
//! ==========
//! The scan is linear per label, quadratic per pass. `n` is the number of
//! labels in one viewport, not the dataset, so a spatial index would cost more
//! in bookkeeping than it saves.

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use crate::consts::LABEL_HEIGHT_MARGIN_PX;
use crate::geom::{Bounds, Point};

/// Screen-space box reserved by one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub bounds: Bounds,
}

impl LabelBox {
    /// The candidate box for a label of `text_width` pixels hung from `anchor`.
    ///
    /// The box starts at `anchor + offset`, spans the measured text width and
    /// extends [`LABEL_HEIGHT_MARGIN_PX`] below its top edge.
    #[must_use]
    pub fn candidate(anchor: Point, offset: Point, text_width: f64) -> Self {
        let min = anchor + offset;
        let max = Point::new(min.x + text_width, min.y + LABEL_HEIGHT_MARGIN_PX);
        Self { bounds: Bounds::from_corners(min, max) }
    }

    /// Position the text is drawn at: the box's top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.bounds.min
    }

    #[must_use]
    pub fn intersects(&self, other: &LabelBox) -> bool {
        self.bounds.intersects(&other.bounds)
    }
}

/// Outcome of offering a candidate box to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Appended to the set; the label should be drawn.
    Placed,
    /// Overlaps the placed box at this index; the label is skipped.
    Collided { with: usize },
}

/// Boxes placed so far in the current pass, in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacedLabelSet {
    boxes: Vec<LabelBox>,
}

impl PlacedLabelSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every placed box. Called at the start of each pass.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    /// Offer a candidate. With `avoid_collisions` off it is always placed.
    pub fn try_place(&mut self, candidate: LabelBox, avoid_collisions: bool) -> Placement {
        if avoid_collisions {
            if let Some(with) = self.first_collision(&candidate) {
                return Placement::Collided { with };
            }
        }
        self.boxes.push(candidate);
        Placement::Placed
    }

    /// Index of the first placed box that `candidate` intersects.
    #[must_use]
    pub fn first_collision(&self, candidate: &LabelBox) -> Option<usize> {
        self.boxes.iter().position(|placed| placed.intersects(candidate))
    }

    #[must_use]
    pub fn boxes(&self) -> &[LabelBox] {
        &self.boxes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
