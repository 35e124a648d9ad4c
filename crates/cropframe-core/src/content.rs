//! The content viewport: a pannable, zoomable layer clipped by the frame.
//!
//! # Coverage
//!
//! The content must always fully cover the frame. Per axis, after every
//! frame resize and every pan or zoom:
//!
//! 1. `offset + logical_size >= frame_size` (right/bottom edge snapped to the frame)
//! 2. `offset <= 0` (left/top edge never retreats into the frame)
//! 3. `logical_size >= frame_size` (content never smaller than the frame)
//!
//! The rules are applied in that fixed order on every call. Coverage is
//! derived from the frame's *current* size and never stored.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::geometry::{Point, Size, Vector};

/// Content offset and logical (zoomed) size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Top-left relative to the frame's top-left; `<= 0` once covered.
    pub offset: Point,
    pub size: Size,
}

impl Content {
    pub fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }

    /// Shift the content by `delta`, then re-establish coverage.
    pub fn pan(&mut self, delta: Vector, frame_size: Size) {
        self.offset += delta;
        self.enforce_coverage(frame_size);
    }

    /// Grow the logical size by `1 + step` on both axes.
    ///
    /// The top-left offset is kept; no re-centering happens.
    pub fn zoom_in(&mut self, step: f64, frame_size: Size) {
        self.size = self.size.scaled(1.0 + step);
        self.enforce_coverage(frame_size);
    }

    /// Shrink the logical size by `1 - step`, never below the frame.
    pub fn zoom_out(&mut self, step: f64, frame_size: Size) {
        self.size = self.size.scaled(1.0 - step);
        self.enforce_coverage(frame_size);
    }

    /// Apply the coverage rules against `frame_size`.
    ///
    /// Idempotent. Returns `true` if anything was adjusted.
    pub fn enforce_coverage(&mut self, frame_size: Size) -> bool {
        let before = *self;

        let (x, width) = cover_axis(self.offset.x, self.size.width, frame_size.width);
        let (y, height) = cover_axis(self.offset.y, self.size.height, frame_size.height);
        self.offset = Point::new(x, y);
        self.size = Size::new(width, height);

        let adjusted = *self != before;
        if adjusted {
            trace!(
                from_offset = ?before.offset,
                from_size = ?before.size,
                to_offset = ?self.offset,
                to_size = ?self.size,
                "content snapped to cover frame"
            );
        }
        adjusted
    }

    /// Whether every coverage rule holds against `frame_size`.
    pub fn covers(&self, frame_size: Size) -> bool {
        axis_covered(self.offset.x, self.size.width, frame_size.width)
            && axis_covered(self.offset.y, self.size.height, frame_size.height)
    }
}

/// One axis of the coverage rules, in their fixed order.
fn cover_axis(mut offset: f64, mut extent: f64, frame: f64) -> (f64, f64) {
    if offset + extent < frame {
        offset = frame - extent;
    }
    if offset > 0.0 {
        offset = 0.0;
    }
    if extent < frame {
        extent = frame;
    }
    (offset, extent)
}

/// Tolerates one rounding step in `frame - extent + extent`.
fn axis_covered(offset: f64, extent: f64, frame: f64) -> bool {
    let eps = 1e-9 * frame.abs().max(1.0);
    offset <= 0.0 && offset + extent >= frame - eps && extent >= frame
}


// ============================================================================
// Property-Based Tests
// ============================================================================
