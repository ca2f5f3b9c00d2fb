//! Drawable features handed to a render pass.
//!
//! A `Feature` pairs a shape, already projected into layer pixels for the
//! current pass, with optional label text. Features are immutable for the
//! duration of a pass; the data layer rebuilds them whenever the view or the
//! data changes.

#[cfg(test)]
#[path = "feature_test.rs"]
mod feature_test;

use crate::geom::Point;

/// Identifier of a feature, stable across passes (the place id for markers).
pub type FeatureId = u64;

/// Projected geometry of a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A circle marker centred on a single point.
    Circle { center: Point, radius: f64 },
    /// A polyline (`closed == false`) or polygon (`closed == true`).
    ///
    /// Each part is one ring or path; only the first part anchors the label.
    Path { parts: Vec<Vec<Point>>, closed: bool },
}

/// A feature with geometry, style and optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: FeatureId,
    pub shape: Shape,
    /// Stroke weight of the shape, used for hit-testing paths.
    pub weight: f64,
    /// Whether the shape takes part in hover and click pass-through.
    pub interactive: bool,
    /// Label text. `None` means the feature never gets a label.
    pub label: Option<String>,
    /// Per-feature label fill color, overriding the default.
    pub text_color: Option<String>,
    /// Fill of the shape itself on the geometry layer.
    pub fill_color: Option<String>,
}

impl Feature {
    /// A circle marker without label.
    #[must_use]
    pub fn circle(id: FeatureId, center: Point, radius: f64) -> Self {
        Self {
            id,
            shape: Shape::Circle { center, radius },
            weight: 1.0,
            interactive: true,
            label: None,
            text_color: None,
            fill_color: None,
        }
    }

    /// An open polyline without label.
    #[must_use]
    pub fn polyline(id: FeatureId, points: Vec<Point>) -> Self {
        Self::path(id, vec![points], false)
    }

    /// A polygon without label.
    #[must_use]
    pub fn polygon(id: FeatureId, rings: Vec<Vec<Point>>) -> Self {
        Self::path(id, rings, true)
    }

    fn path(id: FeatureId, parts: Vec<Vec<Point>>, closed: bool) -> Self {
        Self {
            id,
            shape: Shape::Path { parts, closed },
            weight: 3.0,
            interactive: true,
            label: None,
            text_color: None,
            fill_color: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// The label text, if present and non-empty.
    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref().filter(|t| !t.is_empty())
    }
}
