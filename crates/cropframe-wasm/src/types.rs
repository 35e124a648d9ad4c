//! Conversions between core values and JavaScript.

use std::fmt::Display;

use wasm_bindgen::JsValue;

/// Wrap any displayable error as a JavaScript `Error`.
///
/// Only callable on wasm32 targets; native tests exercise the core error
/// types directly.
pub(crate) fn to_js_error<E: Display>(err: E) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
