use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

/// Failures while touching the DOM.
///
/// None of these reach the page: callers log them and fall back to doing
/// nothing, so the worst outcome is a static widget.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// Creates an element and casts it to `HtmlElement`.
pub fn create_html(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, UiError> {
    let element = document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::Js(format!("<{}> is not an HtmlElement", tag)))?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}
