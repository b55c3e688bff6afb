use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("JavaScript call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Filter list has no \"all\" entry")]
    MissingAllFilter,
    #[error("Filter \"{0}\" appears more than once")]
    DuplicateFilter(String),
}
