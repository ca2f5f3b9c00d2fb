//! Crate error type.
//!
//! Label rendering itself has no recoverable failures: degenerate geometry is
//! a skip case, not an error. Errors come from option parsing, malformed
//! viewport payloads, `Canvas2D` calls the browser rejects and misuse of the
//! filter panel.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid options JSON: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },
    #[error("invalid viewport payload: {0}")]
    Payload(#[source] serde_json::Error),
    #[error("canvas call failed: {0}")]
    Canvas(String),
    #[error("unknown filter section: {0}")]
    UnknownFilterSection(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Canvas(message)
    }
}
