//! The eight resize handles and their delta-to-geometry table.
//!
//! Each handle moves the edges it touches and leaves the opposite edges
//! fixed. For a pointer delta `(dx, dy)`:
//!
//! | Handle | x | y | width | height |
//! |---|---|---|---|---|
//! | top-left | +dx | +dy | -dx | -dy |
//! | top | | +dy | | -dy |
//! | top-right | | +dy | +dx | -dy |
//! | right | | | +dx | |
//! | bottom-right | | | +dx | +dy |
//! | bottom | | | | +dy |
//! | bottom-left | +dx | | -dx | +dy |
//! | left | +dx | | -dx | |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseHandleError;
use crate::geometry::{Point, Size, Vector};

/// A corner or edge grab point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

/// Per-handle coefficients applied to the pointer delta.
///
/// `position.x += x * dx`, `position.y += y * dy`,
/// `size.width += width * dx`, `size.height += height * dy`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Coefficients {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

const fn coeffs(x: f64, y: f64, width: f64, height: f64) -> Coefficients {
    Coefficients {
        x,
        y,
        width,
        height,
    }
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::Top,
        ResizeHandle::TopRight,
        ResizeHandle::Right,
        ResizeHandle::BottomRight,
        ResizeHandle::Bottom,
        ResizeHandle::BottomLeft,
        ResizeHandle::Left,
    ];

    fn coefficients(self) -> Coefficients {
        match self {
            ResizeHandle::TopLeft => coeffs(1.0, 1.0, -1.0, -1.0),
            ResizeHandle::Top => coeffs(0.0, 1.0, 0.0, -1.0),
            ResizeHandle::TopRight => coeffs(0.0, 1.0, 1.0, -1.0),
            ResizeHandle::Right => coeffs(0.0, 0.0, 1.0, 0.0),
            ResizeHandle::BottomRight => coeffs(0.0, 0.0, 1.0, 1.0),
            ResizeHandle::Bottom => coeffs(0.0, 0.0, 0.0, 1.0),
            ResizeHandle::BottomLeft => coeffs(1.0, 0.0, -1.0, 1.0),
            ResizeHandle::Left => coeffs(1.0, 0.0, -1.0, 0.0),
        }
    }

    /// Apply `delta` to a rectangle, returning the new `(position, size)`.
    ///
    /// This is a pure mapping; minimum-area checks belong to the caller.
    pub fn apply(self, position: Point, size: Size, delta: Vector) -> (Point, Size) {
        let c = self.coefficients();
        // Zero coefficient: field is left bit-identical.
        let step = |value: f64, k: f64, d: f64| if k == 0.0 { value } else { value + k * d };

        (
            Point::new(
                step(position.x, c.x, delta.dx),
                step(position.y, c.y, delta.dy),
            ),
            Size::new(
                step(size.width, c.width, delta.dx),
                step(size.height, c.height, delta.dy),
            ),
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResizeHandle::TopLeft => "top-left",
            ResizeHandle::Top => "top",
            ResizeHandle::TopRight => "top-right",
            ResizeHandle::Right => "right",
            ResizeHandle::BottomRight => "bottom-right",
            ResizeHandle::Bottom => "bottom",
            ResizeHandle::BottomLeft => "bottom-left",
            ResizeHandle::Left => "left",
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeHandle {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeHandle::ALL
            .into_iter()
            .find(|handle| handle.as_str() == s)
            .ok_or_else(|| ParseHandleError(s.to_string()))
    }
}
