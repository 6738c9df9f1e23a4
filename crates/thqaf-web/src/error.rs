use wasm_bindgen::JsValue;

/// Failures while binding the widgets to the page.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no `document`")]
    NoDocument,
    #[error("document has no <body>")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WebError> for JsValue {
    fn from(error: WebError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
