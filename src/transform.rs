//! Keeping the overlay aligned with the host map.
//!
//! Two separate concerns live here:
//!
//! - **Placement during pan/zoom** ([`overlay_placement`]): between passes the
//!   overlay is not redrawn; instead its element is translated and scaled so
//!   the pixels drawn at the last pass line up with the host's animated view.
//! - **Per-pass layout** ([`SurfaceLayout`]): at each pass the overlay is
//!   repositioned at the padded view bounds, its backing store resized (which
//!   clears it) and its context origin moved so features projected into layer
//!   pixels can be drawn as-is.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::consts::RETINA_PIXEL_RATIO;
use crate::geo::{LatLng, Projection, zoom_scale};
use crate::geom::{Bounds, Point};

/// View parameters a render pass is drawn for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassFrame {
    /// Padded drawing area in layer pixels.
    pub bounds: Bounds,
    /// Map center at the time of the pass.
    pub center: LatLng,
    pub zoom: f64,
    /// Size of the visible map viewport in CSS pixels (without padding).
    pub viewport_size: Point,
}

impl PassFrame {
    /// Frame for a viewport of `viewport_size` whose top-left corner sits at
    /// layer point `viewport_origin`, grown by `padding` of its size per side.
    #[must_use]
    pub fn padded(viewport_origin: Point, viewport_size: Point, padding: f64, center: LatLng, zoom: f64) -> Self {
        let min = (viewport_origin - viewport_size * padding).round();
        let max = (min + viewport_size * (1.0 + 2.0 * padding)).round();
        Self { bounds: Bounds::from_corners(min, max), center, zoom, viewport_size }
    }
}

/// Backing-store multiplier for a device pixel ratio: 2 on high-density displays.
#[must_use]
pub fn pixel_ratio_for(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio > 1.0 { RETINA_PIXEL_RATIO } else { 1.0 }
}

/// Geometry applied to the overlay element and its context at the start of a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    /// Element position in layer pixels (top-left of the padded bounds).
    pub position: Point,
    /// Element size in CSS pixels.
    pub css_size: Point,
    /// Backing-store width in device pixels.
    pub backing_width: u32,
    /// Backing-store height in device pixels.
    pub backing_height: u32,
    /// Uniform context scale compensating for the enlarged backing store.
    pub pixel_ratio: f64,
    /// Context translation so layer-pixel geometry lands on the surface.
    pub origin: Point,
}

impl SurfaceLayout {
    #[must_use]
    pub fn for_frame(frame: &PassFrame, device_pixel_ratio: f64) -> Self {
        let pixel_ratio = pixel_ratio_for(device_pixel_ratio);
        let css_size = frame.bounds.size();
        Self {
            position: frame.bounds.min,
            css_size,
            backing_width: device_pixels(css_size.x * pixel_ratio),
            backing_height: device_pixels(css_size.y * pixel_ratio),
            pixel_ratio,
            origin: -frame.bounds.min,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn device_pixels(v: f64) -> u32 {
    v.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// CSS `transform-origin` the overlay must carry for [`OverlayPlacement`] to
/// line up: the scale pivots on the element's top-left corner.
pub const TRANSFORM_ORIGIN: &str = "0 0";

/// Translate-and-scale applied to the overlay element between passes.
///
/// Only valid under [`TRANSFORM_ORIGIN`]; with the CSS default of `50% 50%`
/// every zoom step shifts the overlay by half its size times `1 - scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPlacement {
    pub top_left: Point,
    pub scale: f64,
}

impl OverlayPlacement {
    /// Placement that leaves an element at `position` unscaled.
    #[must_use]
    pub fn at(position: Point) -> Self {
        Self { top_left: position, scale: 1.0 }
    }

    /// Where the element pixel at `local` (relative to the element's
    /// top-left corner) lands in layer pixels.
    #[must_use]
    pub fn map_point(&self, local: Point) -> Point {
        self.top_left + local * self.scale
    }

    /// CSS `transform` value for this placement.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translate3d({}px,{}px,0) scale({})", self.top_left.x, self.top_left.y, self.scale)
    }
}

/// The view the overlay was last drawn for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnView {
    pub center: LatLng,
    pub zoom: f64,
    /// Element position set by the last pass.
    pub position: Point,
    pub viewport_size: Point,
}

impl DrawnView {
    #[must_use]
    pub fn from_frame(frame: &PassFrame) -> Self {
        Self {
            center: frame.center,
            zoom: frame.zoom,
            position: frame.bounds.min,
            viewport_size: frame.viewport_size,
        }
    }
}

/// Where to put the overlay so the last pass lines up with a view moving to
/// `target_center` at `target_zoom`.
///
/// `topLeft = viewHalf * -scale + position + viewHalf - centerOffset`, where
/// `viewHalf` is half the padded viewport and `centerOffset` is the pixel
/// distance between the drawn and target centers at the target zoom.
#[must_use]
pub fn overlay_placement<P: Projection + ?Sized>(
    projection: &P,
    drawn: &DrawnView,
    padding: f64,
    target_center: LatLng,
    target_zoom: f64,
) -> OverlayPlacement {
    let scale = zoom_scale(target_zoom, drawn.zoom);
    let view_half = drawn.viewport_size * (0.5 + padding);
    let current_center = projection.project(drawn.center, target_zoom);
    let dest_center = projection.project(target_center, target_zoom);
    let center_offset = dest_center - current_center;

    let top_left = view_half * -scale + drawn.position + view_half - center_offset;
    OverlayPlacement { top_left, scale }
}
