//! Renderer and map options.
//!
//! Options arrive from the host as a JSON object. Every field is optional;
//! missing fields take the defaults in [`crate::consts`]. Parsed options are
//! validated once so the render path can rely on finite offsets and a usable
//! font.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_CLICK_TOLERANCE_PX, DEFAULT_LABEL_Z_INDEX, DEFAULT_OFFSET_X_PX,
    DEFAULT_OFFSET_Y_PX, DEFAULT_PADDING, DEFAULT_TEXT_BORDER_WEIGHT, DEFAULT_TEXT_WEIGHT, DEFAULT_ZOOM,
    POINTER_THROTTLE_MS,
};
use crate::error::Error;
use crate::geo::{LatLng, LatLngBounds};
use crate::geom::Point;

/// Fixed pixel displacement from a feature's anchor to its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelOffset {
    pub x: f64,
    pub y: f64,
}

impl Default for LabelOffset {
    fn default() -> Self {
        Self { x: DEFAULT_OFFSET_X_PX, y: DEFAULT_OFFSET_Y_PX }
    }
}

impl From<LabelOffset> for Point {
    fn from(offset: LabelOffset) -> Self {
        Point::new(offset.x, offset.y)
    }
}

/// Options recognized by the label overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    /// Skip labels whose box overlaps an already placed label.
    pub collision: bool,
    /// Line width of the halo stroked under each label.
    pub text_border_weight: f64,
    /// Halo color.
    pub text_border_color: String,
    /// Line width set while filling the text.
    pub text_weight: f64,
    /// Fill color for labels without a per-feature color.
    pub text_color: String,
    /// CSS font used for both measuring and drawing.
    pub font: String,
    /// Stacking position of the overlay element.
    pub z_index: i32,
    pub offset: LabelOffset,
    /// Extra overlay area around the viewport, as a fraction of its size per side.
    pub padding: f64,
    /// Hit-test slop around shapes, in screen pixels.
    pub click_tolerance: f64,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            collision: true,
            text_border_weight: DEFAULT_TEXT_BORDER_WEIGHT,
            text_border_color: "black".to_owned(),
            text_weight: DEFAULT_TEXT_WEIGHT,
            text_color: "white".to_owned(),
            font: "14px sans".to_owned(),
            z_index: DEFAULT_LABEL_Z_INDEX,
            offset: LabelOffset::default(),
            padding: DEFAULT_PADDING,
            click_tolerance: DEFAULT_CLICK_TOLERANCE_PX,
        }
    }
}

impl LabelOptions {
    /// Parse options from a (possibly partial) JSON object and validate them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON and
    /// [`Error::InvalidOption`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every numeric option is usable by the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] naming the first offending field.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.offset.x.is_finite() || !self.offset.y.is_finite() {
            return Err(invalid("offset", format!("must be finite, got ({}, {})", self.offset.x, self.offset.y)));
        }
        non_negative("text_border_weight", self.text_border_weight)?;
        non_negative("text_weight", self.text_weight)?;
        non_negative("padding", self.padding)?;
        non_negative("click_tolerance", self.click_tolerance)?;
        if self.font.trim().is_empty() {
            return Err(invalid("font", "must not be empty".to_owned()));
        }
        Ok(())
    }
}

/// Options for the map view as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    /// Area the view may not be panned out of.
    pub max_bounds: LatLngBounds,
    /// Minimum interval between two hover evaluations, in milliseconds.
    pub pointer_throttle_ms: f64,
    pub labels: LabelOptions,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG),
            zoom: DEFAULT_ZOOM,
            max_bounds: LatLngBounds::from_corners(LatLng::new(9.3, 163.9), LatLng::new(-54.1, 83.2)),
            pointer_throttle_ms: POINTER_THROTTLE_MS,
            labels: LabelOptions { offset: LabelOffset { x: 10.0, y: 5.0 }, ..LabelOptions::default() },
        }
    }
}

impl MapOptions {
    /// Parse map options from a (possibly partial) JSON object and validate them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON and
    /// [`Error::InvalidOption`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] naming the first offending field.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.zoom.is_finite() {
            return Err(invalid("zoom", format!("must be finite, got {}", self.zoom)));
        }
        non_negative("pointer_throttle_ms", self.pointer_throttle_ms)?;
        if !self.max_bounds.contains(self.center) {
            return Err(invalid("center", "must lie inside max_bounds".to_owned()));
        }
        self.labels.validate()
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("must be a non-negative number, got {value}")))
    }
}

fn invalid(name: &'static str, reason: String) -> Error {
    Error::InvalidOption { name, reason }
}
