//! Cropframe WASM - WebAssembly bindings for Cropframe
//!
//! This crate exposes the cropframe-core transform controller to
//! JavaScript/TypeScript hosts. The host owns rendering, pointer listeners
//! and hit-testing; the controller owns the geometry.
//!
//! # Module Structure
//!
//! - `controller` - `JsFrameController`, one per managed element
//! - `types` - error conversion helpers
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsFrameController } from '@cropframe/wasm';
//!
//! await init();
//!
//! const frame = new JsFrameController({ min_area: 10000 });
//! body.addEventListener('mousedown', e => frame.start_move(e.clientX, e.clientY));
//! handle.addEventListener('mousedown', e => frame.start_resize('top-left', e.clientX, e.clientY));
//! document.addEventListener('mousemove', e => { frame.pointer_move(e.clientX, e.clientY); render(frame); });
//! document.addEventListener('mouseup', e => frame.pointer_up(e.clientX, e.clientY));
//! ```

use wasm_bindgen::prelude::*;

mod controller;
mod types;

pub use controller::JsFrameController;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
