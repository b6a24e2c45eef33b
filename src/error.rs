//! Error types for widget injection.
//!
//! ERROR HANDLING
//! ==============
//! Only injection can fail loudly. Once the panel is mounted every failure
//! (bad message, duplicate id, network, clipboard) degrades to "nothing
//! changed" and is at most logged, so those paths use their own local error
//! enums and never reach this type.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("document has no <{0}> element")]
    MissingElement(&'static str),
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "browser")]
impl From<WidgetError> for wasm_bindgen::JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
