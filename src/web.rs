//! Browser bindings: the Canvas2D context as a [`LabelCanvas`].

use web_sys::CanvasRenderingContext2d;

use crate::error::Error;
use crate::surface::LabelCanvas;

impl LabelCanvas for CanvasRenderingContext2d {
    fn set_font(&self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn measure_text(&self, text: &str) -> Result<f64, Error> {
        Ok(CanvasRenderingContext2d::measure_text(self, text)?.width())
    }

    fn set_global_alpha(&self, alpha: f64) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }

    fn set_line_width(&self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_stroke_style(&self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_fill_style(&self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn stroke_text(&self, text: &str, x: f64, y: f64) -> Result<(), Error> {
        CanvasRenderingContext2d::stroke_text(self, text, x, y)?;
        Ok(())
    }

    fn fill_text(&self, text: &str, x: f64, y: f64) -> Result<(), Error> {
        CanvasRenderingContext2d::fill_text(self, text, x, y)?;
        Ok(())
    }

    fn scale(&self, x: f64, y: f64) -> Result<(), Error> {
        CanvasRenderingContext2d::scale(self, x, y)?;
        Ok(())
    }

    fn translate(&self, x: f64, y: f64) -> Result<(), Error> {
        CanvasRenderingContext2d::translate(self, x, y)?;
        Ok(())
    }
}

/// Monotonic milliseconds for pointer throttling.
///
/// Falls back to the wall clock where the window exposes no `performance`.
#[must_use]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

/// The window's device pixel ratio, or 1 outside a browser window.
#[must_use]
pub fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
}
