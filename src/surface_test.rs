//! Recording fake for [`LabelCanvas`], shared by the render and engine tests.

#![allow(clippy::float_cmp)]

use std::cell::RefCell;

use super::*;

/// One recorded context call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    SetFont(String),
    SetGlobalAlpha(f64),
    SetLineWidth(f64),
    SetStrokeStyle(String),
    SetFillStyle(String),
    StrokeText { text: String, x: f64, y: f64 },
    FillText { text: String, x: f64, y: f64 },
    Scale(f64, f64),
    Translate(f64, f64),
}

/// Canvas that measures every character as `char_width` pixels and records calls.
pub(crate) struct RecordingCanvas {
    pub char_width: f64,
    /// Text whose measurement fails, to exercise per-feature error isolation.
    pub fail_on: Option<String>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingCanvas {
    pub(crate) fn new() -> Self {
        Self { char_width: 7.0, fail_on: None, calls: RefCell::new(Vec::new()) }
    }

    pub(crate) fn failing_on(text: &str) -> Self {
        Self { fail_on: Some(text.to_owned()), ..Self::new() }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Text of every `fill_text` call, in order.
    pub(crate) fn filled_texts(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::FillText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl LabelCanvas for RecordingCanvas {
    fn set_font(&self, font: &str) {
        self.record(Call::SetFont(font.to_owned()));
    }

    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&self, text: &str) -> Result<f64, Error> {
        if self.fail_on.as_deref() == Some(text) {
            return Err(Error::Canvas(format!("cannot measure {text}")));
        }
        Ok(text.chars().count() as f64 * self.char_width)
    }

    fn set_global_alpha(&self, alpha: f64) {
        self.record(Call::SetGlobalAlpha(alpha));
    }

    fn set_line_width(&self, width: f64) {
        self.record(Call::SetLineWidth(width));
    }

    fn set_stroke_style(&self, color: &str) {
        self.record(Call::SetStrokeStyle(color.to_owned()));
    }

    fn set_fill_style(&self, color: &str) {
        self.record(Call::SetFillStyle(color.to_owned()));
    }

    fn stroke_text(&self, text: &str, x: f64, y: f64) -> Result<(), Error> {
        self.record(Call::StrokeText { text: text.to_owned(), x, y });
        Ok(())
    }

    fn fill_text(&self, text: &str, x: f64, y: f64) -> Result<(), Error> {
        self.record(Call::FillText { text: text.to_owned(), x, y });
        Ok(())
    }

    fn scale(&self, x: f64, y: f64) -> Result<(), Error> {
        self.record(Call::Scale(x, y));
        Ok(())
    }

    fn translate(&self, x: f64, y: f64) -> Result<(), Error> {
        self.record(Call::Translate(x, y));
        Ok(())
    }
}

#[test]
fn recording_canvas_measures_per_char() {
    let canvas = RecordingCanvas::new();
    assert_eq!(canvas.measure_text("abcd").unwrap(), 28.0);
    assert_eq!(canvas.measure_text("").unwrap(), 0.0);
}

#[test]
fn recording_canvas_fails_on_marked_text() {
    let canvas = RecordingCanvas::failing_on("bad");
    assert!(matches!(canvas.measure_text("bad"), Err(Error::Canvas(_))));
    assert!(canvas.measure_text("good").is_ok());
}

#[test]
fn recording_canvas_records_in_order() {
    let canvas = RecordingCanvas::new();
    canvas.set_font("10px serif");
    canvas.fill_text("x", 1.0, 2.0).unwrap();
    assert_eq!(
        canvas.calls(),
        vec![Call::SetFont("10px serif".to_owned()), Call::FillText { text: "x".to_owned(), x: 1.0, y: 2.0 }]
    );
    canvas.clear();
    assert!(canvas.calls().is_empty());
}
