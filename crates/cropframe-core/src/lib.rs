//! Cropframe Core - Interactive frame transform controller
//!
//! This crate turns a stream of pointer events into changes to a framed
//! element's position, size and rotation, and to the offset and zoom of the
//! content layer it clips, while keeping two invariants:
//!
//! - a resize never leaves the frame smaller than its minimum area (an
//!   offending delta is rejected whole);
//! - the content always fully covers the frame.
//!
//! # Module Structure
//!
//! - `geometry` - point, vector and size value types
//! - `config` - construction parameters and validation
//! - `frame` - the controlled rectangle
//! - `handle` - the eight resize handles and their delta table
//! - `content` - pan, zoom and coverage enforcement for the content layer
//! - `gesture` - the gesture state machine
//! - `controller` - the per-element controller tying it all together
//!
//! Rendering, pointer hardware binding and hit-testing are left to the host.

pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod gesture;
pub mod handle;

pub use config::{ContentConfig, FrameConfig};
pub use content::Content;
pub use controller::{FrameController, TransformSnapshot};
pub use error::{ConfigError, ParseHandleError};
pub use frame::Frame;
pub use geometry::{Point, Size, Vector};
pub use gesture::{Effect, GestureEvent, GestureKind, GestureMode, GestureState, RotationAnchor};
pub use handle::ResizeHandle;
