//! Gesture state machine.
//!
//! A gesture is one press-move-release interaction owned by exactly one
//! mode. [`GestureState::transition`] is a pure function from
//! `(state, event)` to `(state, effect)`; it reads the frame (for the
//! rotation center) but never mutates geometry. The
//! [`FrameController`](crate::FrameController) applies the returned
//! [`Effect`].
//!
//! # Transitions
//!
//! ```text
//!              Start(Move)        Start(PanContent)
//!   Idle ───────────────▶ Moving ─────────────────▶ PanningContent
//!    │ ▲                                                  ▲
//!    │ │ End (from any state)                             │
//!    │ └──────────────────────────────────────────────────┤
//!    ├── Start(Resize(h)) ─▶ Resizing                     │
//!    ├── Start(Rotate) ────▶ Rotating                     │
//!    └── Start(PanContent) ───────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. Exactly one mode is active at any time.
//! 2. The only mode switch that skips `Idle` is `Moving → PanningContent`.
//!    Any other start event during an active gesture is ignored.
//! 3. Every `End` returns to `Idle`; an `End` while already `Idle` leaves it there.
//! 4. Move, resize and pan updates are incremental: each update's delta is
//!    taken from the previous update's pointer, which is replaced on every
//!    update whether or not the resulting mutation is accepted.
//! 5. Rotation is absolute: every update recomputes the angle from the
//!    anchor captured at gesture start, so the result does not depend on
//!    how many updates carried the pointer along its path.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::geometry::{Point, Vector};
use crate::handle::ResizeHandle;

/// Tag of the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureMode {
    #[default]
    Idle,
    Moving,
    Resizing,
    Rotating,
    PanningContent,
}

impl GestureMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GestureMode::Idle => "idle",
            GestureMode::Moving => "moving",
            GestureMode::Resizing => "resizing",
            GestureMode::Rotating => "rotating",
            GestureMode::PanningContent => "panning-content",
        }
    }
}

impl fmt::Display for GestureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the pointer engaged at press time, as reported by host hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureKind {
    /// The frame body.
    Move,
    /// One of the eight resize handles.
    Resize(ResizeHandle),
    /// The rotation knob.
    Rotate,
    /// The content layer.
    PanContent,
}

/// Captured once at rotate start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationAnchor {
    /// Pointer angle around the frame center at press time.
    pub mouse_start_angle: f64,
    /// Frame rotation at press time.
    pub element_start_angle: f64,
}

impl RotationAnchor {
    pub fn capture(frame: &Frame, pointer: Point) -> Self {
        Self {
            mouse_start_angle: frame.pointer_angle(pointer),
            element_start_angle: frame.rotation,
        }
    }

    /// Absolute rotation for the pointer's current angle.
    pub fn rotation_for(&self, mouse_angle: f64) -> f64 {
        mouse_angle - self.mouse_start_angle + self.element_start_angle
    }
}

/// Per-gesture session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Moving {
        last_pointer: Point,
    },
    Resizing {
        handle: ResizeHandle,
        last_pointer: Point,
    },
    Rotating {
        anchor: RotationAnchor,
    },
    PanningContent {
        last_pointer: Point,
    },
}

/// One discrete pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed on `kind`.
    Start { kind: GestureKind, pointer: Point },
    /// Pointer moved.
    Update { pointer: Point },
    /// Pointer released; `inside` is whether the release target lies within the element.
    End { pointer: Point, inside: bool },
}

/// Mutation requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    Select,
    Deselect,
    Translate(Vector),
    Resize { handle: ResizeHandle, delta: Vector },
    /// Absolute rotation in radians.
    Rotate(f64),
    Pan(Vector),
}

impl GestureState {
    pub fn mode(&self) -> GestureMode {
        match self {
            GestureState::Idle => GestureMode::Idle,
            GestureState::Moving { .. } => GestureMode::Moving,
            GestureState::Resizing { .. } => GestureMode::Resizing,
            GestureState::Rotating { .. } => GestureMode::Rotating,
            GestureState::PanningContent { .. } => GestureMode::PanningContent,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// Advance the machine by one event.
    pub fn transition(self, event: GestureEvent, frame: &Frame) -> (GestureState, Effect) {
        match event {
            GestureEvent::Start { kind, pointer } => self.start(kind, pointer, frame),
            GestureEvent::Update { pointer } => self.update(pointer, frame),
            GestureEvent::End { inside, .. } => {
                // The gesture owns focus while resizing or rotating.
                let owns_focus = matches!(
                    self,
                    GestureState::Resizing { .. } | GestureState::Rotating { .. }
                );
                let effect = if !inside && !owns_focus {
                    Effect::Deselect
                } else {
                    Effect::None
                };
                (GestureState::Idle, effect)
            }
        }
    }

    fn start(self, kind: GestureKind, pointer: Point, frame: &Frame) -> (GestureState, Effect) {
        match (self, kind) {
            (GestureState::Idle, GestureKind::Move) => (
                GestureState::Moving {
                    last_pointer: pointer,
                },
                Effect::Select,
            ),
            (GestureState::Idle, GestureKind::Resize(handle)) => (
                GestureState::Resizing {
                    handle,
                    last_pointer: pointer,
                },
                Effect::None,
            ),
            (GestureState::Idle, GestureKind::Rotate) => (
                GestureState::Rotating {
                    anchor: RotationAnchor::capture(frame, pointer),
                },
                Effect::None,
            ),
            (GestureState::Idle | GestureState::Moving { .. }, GestureKind::PanContent) => (
                GestureState::PanningContent {
                    last_pointer: pointer,
                },
                Effect::Select,
            ),
            (state, _) => (state, Effect::None),
        }
    }

    fn update(self, pointer: Point, frame: &Frame) -> (GestureState, Effect) {
        match self {
            GestureState::Idle => (self, Effect::None),
            GestureState::Moving { last_pointer } => (
                GestureState::Moving {
                    last_pointer: pointer,
                },
                Effect::Translate(pointer - last_pointer),
            ),
            GestureState::Resizing {
                handle,
                last_pointer,
            } => (
                GestureState::Resizing {
                    handle,
                    last_pointer: pointer,
                },
                Effect::Resize {
                    handle,
                    delta: pointer - last_pointer,
                },
            ),
            GestureState::Rotating { anchor } => {
                let rotation = anchor.rotation_for(frame.pointer_angle(pointer));
                (self, Effect::Rotate(rotation))
            }
            GestureState::PanningContent { last_pointer } => (
                GestureState::PanningContent {
                    last_pointer: pointer,
                },
                Effect::Pan(pointer - last_pointer),
            ),
        }
    }
}
