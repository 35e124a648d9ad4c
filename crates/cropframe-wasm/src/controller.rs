//! WASM bindings for the frame controller.
//!
//! One `JsFrameController` per managed element. The host binds its own
//! mouse/pointer listeners, hit-tests the press target, and forwards the
//! resulting calls here; after each call it reads the geometry back and
//! renders it.

use cropframe_core::{FrameConfig, FrameController, GestureKind, Point, ResizeHandle};
use wasm_bindgen::prelude::*;

use crate::types::to_js_error;

/// Transform controller for one element.
#[wasm_bindgen]
pub struct JsFrameController {
    inner: FrameController,
}

#[wasm_bindgen]
impl JsFrameController {
    /// Create a controller.
    ///
    /// # Arguments
    /// * `config` - `undefined`/`null` for defaults, or a partial config object
    ///   (`{ position: {x, y}, size: {width, height}, rotation, min_area,
    ///   resize_percentage, content: { offset, size } }`)
    ///
    /// # Errors
    /// Throws if the object cannot be deserialized or fails validation.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsFrameController, JsValue> {
        let config: FrameConfig = if config.is_undefined() || config.is_null() {
            FrameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| to_js_error(format!("Invalid frame config: {}", e)))?
        };

        Self::from_config(config).map_err(to_js_error)
    }

    /// Press on the frame body.
    pub fn start_move(&mut self, x: f64, y: f64) {
        self.inner.on_gesture_start(GestureKind::Move, Point::new(x, y));
    }

    /// Press on a resize handle.
    ///
    /// # Arguments
    /// * `handle` - One of `top-left`, `top`, `top-right`, `right`,
    ///   `bottom-right`, `bottom`, `bottom-left`, `left`
    ///
    /// # Errors
    /// Throws on an unknown handle name; the controller is left untouched.
    pub fn start_resize(&mut self, handle: &str, x: f64, y: f64) -> Result<(), JsValue> {
        let handle: ResizeHandle = handle.parse().map_err(to_js_error)?;
        self.inner.on_gesture_start(GestureKind::Resize(handle), Point::new(x, y));
        Ok(())
    }

    /// Press on the rotation knob.
    pub fn start_rotate(&mut self, x: f64, y: f64) {
        self.inner.on_gesture_start(GestureKind::Rotate, Point::new(x, y));
    }

    /// Press on the content layer.
    pub fn start_pan(&mut self, x: f64, y: f64) {
        self.inner.on_gesture_start(GestureKind::PanContent, Point::new(x, y));
    }

    /// Pointer moved anywhere in the document.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.on_pointer_update(Point::new(x, y));
    }

    /// Pointer released; hit-tested against the rotated frame.
    pub fn pointer_up(&mut self, x: f64, y: f64) {
        self.inner.on_gesture_end(Point::new(x, y));
    }

    /// Pointer released, with the host's own hit-test of the release target.
    pub fn pointer_up_with_target(&mut self, x: f64, y: f64, inside: bool) {
        self.inner.on_gesture_end_with_target(Point::new(x, y), inside);
    }

    pub fn zoom_in(&mut self) {
        self.inner.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.inner.zoom_out();
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.position().x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.position().y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.size().width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.size().height
    }

    /// Rotation in radians
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.inner.rotation()
    }

    /// Rotation in degrees, for CSS `rotate(...)`
    #[wasm_bindgen(getter)]
    pub fn rotation_degrees(&self) -> f64 {
        self.inner.rotation_degrees()
    }

    #[wasm_bindgen(getter)]
    pub fn content_x(&self) -> f64 {
        self.inner.content_offset().x
    }

    #[wasm_bindgen(getter)]
    pub fn content_y(&self) -> f64 {
        self.inner.content_offset().y
    }

    #[wasm_bindgen(getter)]
    pub fn content_width(&self) -> f64 {
        self.inner.content_size().width
    }

    #[wasm_bindgen(getter)]
    pub fn content_height(&self) -> f64 {
        self.inner.content_size().height
    }

    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> bool {
        self.inner.selected()
    }

    /// Whether the content and frame sizes differ
    #[wasm_bindgen(getter)]
    pub fn is_resized(&self) -> bool {
        self.inner.is_resized()
    }

    /// Current gesture mode (`idle`, `moving`, `resizing`, `rotating`, `panning-content`)
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.mode().to_string()
    }

    /// All geometry as a plain JS object.
    ///
    /// # Errors
    /// Throws if serialization fails.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).map_err(to_js_error)
    }
}

impl JsFrameController {
    /// Build from an already-deserialized config.
    pub fn from_config(config: FrameConfig) -> Result<Self, cropframe_core::ConfigError> {
        Ok(Self {
            inner: FrameController::new(config)?,
        })
    }

    pub fn inner(&self) -> &FrameController {
        &self.inner
    }
}
