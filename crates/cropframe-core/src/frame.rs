//! The controlled rectangle: position, size and rotation.
//!
//! Rotation is a rendering transform about the frame's center. It never
//! changes the stored axis-aligned `position`/`size`; the center used for
//! rotation gestures is always computed from those un-rotated values.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size, Vector};

/// Frame geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Top-left corner in parent coordinates.
    pub position: Point,
    pub size: Size,
    /// Radians about the frame center, unconstrained range.
    pub rotation: f64,
}

impl Frame {
    pub fn new(position: Point, size: Size, rotation: f64) -> Self {
        Self {
            position,
            size,
            rotation,
        }
    }

    pub fn area(&self) -> f64 {
        self.size.area()
    }

    /// Center of the un-rotated rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }

    /// Translate by `delta`. Moving has no geometric constraint.
    pub fn translate(&mut self, delta: Vector) {
        self.position += delta;
    }

    /// Angle of `pointer` around the frame center, in radians.
    pub fn pointer_angle(&self, pointer: Point) -> f64 {
        pointer.angle_from(self.center())
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    /// Whether `pointer` falls inside the frame as rendered (rotation applied).
    ///
    /// The pointer is rotated by `-rotation` about the center into the
    /// frame's local axes, then tested against the axis-aligned rectangle.
    /// Edges count as inside.
    pub fn contains(&self, pointer: Point) -> bool {
        let center = self.center();
        let (sin, cos) = (-self.rotation).sin_cos();
        let dx = pointer.x - center.x;
        let dy = pointer.y - center.y;

        let local_x = dx * cos - dy * sin;
        let local_y = dx * sin + dy * cos;

        local_x.abs() <= self.size.width / 2.0 && local_y.abs() <= self.size.height / 2.0
    }
}
