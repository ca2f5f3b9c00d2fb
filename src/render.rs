//! Label rendering: measures, places and draws one feature's label.
//!
//! This module is generic over [`LabelCanvas`] so the full label path runs in
//! tests without a browser. It reads the options and the feature and writes
//! only to the canvas and the pass's [`PlacedLabelSet`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::anchor;
use crate::collision::{LabelBox, Placement, PlacedLabelSet};
use crate::config::LabelOptions;
use crate::error::Error;
use crate::feature::Feature;
use crate::geom::Point;
use crate::surface::LabelCanvas;

/// What happened to one feature's label in a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelOutcome {
    /// Drawn and reserved in the placed set.
    Drawn(LabelBox),
    /// Skipped: its box overlaps the placed box at this index.
    Collided { with: usize },
    /// Skipped: the feature carries no label text.
    NoText,
    /// Skipped: the geometry yields no usable anchor.
    NoAnchor,
    /// Skipped: the canvas rejected a measure or draw call.
    Failed,
}

impl LabelOutcome {
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn(_))
    }
}

/// Measure, test and (if it fits) draw the label of `feature`.
///
/// # Errors
///
/// Returns [`Error::Canvas`] if measuring or drawing fails. The caller treats
/// that as a skipped label and continues the pass.
pub fn draw_label<C: LabelCanvas + ?Sized>(
    ctx: &C,
    options: &LabelOptions,
    placed: &mut PlacedLabelSet,
    feature: &Feature,
) -> Result<LabelOutcome, Error> {
    let Some(text) = feature.label_text() else {
        return Ok(LabelOutcome::NoText);
    };
    let Some(anchor) = anchor::resolve(&feature.shape).filter(|p| p.is_finite()) else {
        return Ok(LabelOutcome::NoAnchor);
    };

    ctx.set_global_alpha(1.0);
    ctx.set_font(&options.font);
    let text_width = ctx.measure_text(text)?;
    if !text_width.is_finite() || text_width < 0.0 {
        return Err(Error::Canvas(format!("unusable text width {text_width} for {text:?}")));
    }

    let offset = Point::from(options.offset);
    let candidate = LabelBox::candidate(anchor, offset, text_width);
    if let Placement::Collided { with } = placed.try_place(candidate, options.collision) {
        return Ok(LabelOutcome::Collided { with });
    }

    draw_text(ctx, options, feature, text, anchor + offset)?;
    Ok(LabelOutcome::Drawn(candidate))
}

/// Stroke a halo, then fill the text over it.
fn draw_text<C: LabelCanvas + ?Sized>(
    ctx: &C,
    options: &LabelOptions,
    feature: &Feature,
    text: &str,
    at: Point,
) -> Result<(), Error> {
    ctx.set_line_width(options.text_border_weight);
    ctx.set_stroke_style(&options.text_border_color);
    ctx.stroke_text(text, at.x, at.y)?;

    let fill = feature.text_color.as_deref().unwrap_or(&options.text_color);
    ctx.set_fill_style(fill);
    ctx.set_line_width(options.text_weight);
    ctx.fill_text(text, at.x, at.y)?;
    Ok(())
}
