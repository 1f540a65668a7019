use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons a scroll behavior could not be set up.
///
/// These never reach the user. The page logs them and renders the section
/// without its animation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    #[error("Invalid pin range: end {end} must exceed start {start}")]
    InvalidPinRange { start: f64, end: f64 },
    #[error("Section {section} has no elements matching {selector}")]
    MissingElements {
        section: &'static str,
        selector: &'static str,
    },
    #[error("Section {0} is not mounted")]
    NotMounted(&'static str),
    #[error("No browser window available")]
    NoWindow,
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
