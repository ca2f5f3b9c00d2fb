//! Traits at the seams between the label engine and the browser.
//!
//! [`LabelCanvas`] is the slice of the `Canvas2D` API the label pass needs.
//! The browser implementation lives in [`crate::web`]; tests drive the same
//! code through a recording fake.
//!
//! [`DrawableSurface`] is the hook contract a host map dispatches into: one
//! call per view change, per redraw and per pointer sample.

#[cfg(test)]
#[path = "surface_test.rs"]
pub(crate) mod surface_test;

use crate::engine::{Action, PassStats};
use crate::error::Error;
use crate::feature::Feature;
use crate::geo::LatLng;
use crate::geom::Point;
use crate::transform::{OverlayPlacement, PassFrame};

/// Drawing context used to measure and draw labels.
///
/// Methods take `&self`: a browser context mutates through shared handles.
pub trait LabelCanvas {
    fn set_font(&self, font: &str);

    /// Rendered width of `text` in the current font, in CSS pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the context rejects the measurement.
    fn measure_text(&self, text: &str) -> Result<f64, Error>;

    fn set_global_alpha(&self, alpha: f64);
    fn set_line_width(&self, width: f64);
    fn set_stroke_style(&self, color: &str);
    fn set_fill_style(&self, color: &str);

    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the context rejects the call.
    fn stroke_text(&self, text: &str, x: f64, y: f64) -> Result<(), Error>;

    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the context rejects the call.
    fn fill_text(&self, text: &str, x: f64, y: f64) -> Result<(), Error>;

    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the context rejects the call.
    fn scale(&self, x: f64, y: f64) -> Result<(), Error>;

    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the context rejects the call.
    fn translate(&self, x: f64, y: f64) -> Result<(), Error>;
}

/// Hook operations of a rendering surface stacked on the host map.
pub trait DrawableSurface {
    /// Prepare the surface element (classes, stacking order, transform origin).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the element cannot be styled.
    fn init_surface(&mut self) -> Result<(), Error>;

    /// Follow the host view towards `center`/`zoom` without redrawing.
    ///
    /// Returns `None` before the first pass, when there is nothing to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the element cannot be repositioned.
    fn update_transform(&mut self, center: LatLng, zoom: f64) -> Result<Option<OverlayPlacement>, Error>;

    /// Redraw every label for `frame`, in the order of `features`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the surface cannot be reset. Failures of
    /// individual labels are not errors; they are counted in [`PassStats`].
    fn draw_pass(&mut self, frame: &PassFrame, features: &[Feature]) -> Result<PassStats, Error>;

    /// Sample the pointer at `point` (layer pixels) at time `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the cursor class cannot be updated.
    fn handle_pointer_move(&mut self, point: Point, now_ms: f64) -> Result<Vec<Action>, Error>;
}
