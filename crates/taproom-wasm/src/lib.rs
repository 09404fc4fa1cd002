//! WebAssembly bindings for Taproom
//!
//! The page script builds a [`FormSession`] per account form and forwards
//! `input`, `blur` and `submit` events to it; the returned annotations say
//! which feedback elements to show. The smaller widgets (like button, share
//! links, rating stars, toasts) are exposed as plain functions and handles.
//!
//! The like request itself stays in JavaScript: the handle only tracks the
//! button state around the `fetch` call.

mod form;
mod init;
mod widgets;

pub use form::FormSession;
pub use init::{init, LogLevel};
pub use widgets::*;

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serialize into plain JS objects rather than `Map`s
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    taproom_core::VERSION.to_owned()
}
