//! Error types for controller construction and handle parsing.

use thiserror::Error;

/// Rejected construction parameters.
///
/// Gesture and zoom operations never fail; the only fallible step is
/// building a controller from a [`FrameConfig`](crate::FrameConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Frame width or height is zero or negative.
    #[error("Frame size must be positive, got {width}x{height}")]
    NonPositiveSize { width: f64, height: f64 },

    /// Minimum area is zero or negative.
    #[error("Minimum area must be positive, got {0}")]
    NonPositiveMinArea(f64),

    /// Initial frame is already smaller than the minimum area.
    #[error("Initial frame area {area} is below the minimum area {min_area}")]
    AreaBelowMinimum { area: f64, min_area: f64 },

    /// Zoom step outside the open interval (0, 1).
    #[error("Resize percentage must be between 0 and 1 (exclusive), got {0}")]
    InvalidResizePercentage(f64),

    /// A NaN or infinite value in the named field.
    #[error("Non-finite value for {0}")]
    NonFiniteValue(&'static str),

    /// Initial content width or height is zero or negative.
    #[error("Content size must be positive, got {width}x{height}")]
    NonPositiveContentSize { width: f64, height: f64 },
}

/// Unknown resize handle name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown resize handle: {0}")]
pub struct ParseHandleError(pub String);
