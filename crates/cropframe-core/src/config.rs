//! Construction parameters for a [`FrameController`](crate::FrameController).
//!
//! Every field has a default, and the structs are `#[serde(default)]`, so a
//! host may pass a partial object (`{ "min_area": 5000 }`) and get the
//! remaining values filled in.
//!
//! # Defaults
//!
//! | Field | Default |
//! |---|---|
//! | `position` | `(300, 300)` |
//! | `size` | `375 x 150` |
//! | `rotation` | `0` rad |
//! | `min_area` | `20000` |
//! | `resize_percentage` | `0.2` |
//! | `content` | offset `(0, 0)`, same size as the frame |

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::{Point, Size};

pub const DEFAULT_MIN_AREA: f64 = 20_000.0;
pub const DEFAULT_RESIZE_PERCENTAGE: f64 = 0.2;

/// Initial geometry of the content layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content top-left relative to the frame top-left.
    pub offset: Point,
    /// Logical (zoomed) size of the content.
    pub size: Size,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            offset: Point::ORIGIN,
            size: FrameConfig::default().size,
        }
    }
}

/// Initial frame geometry and interaction limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub position: Point,
    pub size: Size,
    /// Initial rotation in radians.
    pub rotation: f64,
    /// Smallest `width * height` a resize may produce.
    pub min_area: f64,
    /// Fractional step applied by each zoom in/out.
    pub resize_percentage: f64,
    /// Initial content geometry; `None` fits the content to the frame.
    pub content: Option<ContentConfig>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            position: Point::new(300.0, 300.0),
            size: Size::new(375.0, 150.0),
            rotation: 0.0,
            min_area: DEFAULT_MIN_AREA,
            resize_percentage: DEFAULT_RESIZE_PERCENTAGE,
            content: None,
        }
    }
}

impl FrameConfig {
    /// Config with the given frame rectangle and default limits.
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            ..Self::default()
        }
    }

    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    pub fn with_resize_percentage(mut self, resize_percentage: f64) -> Self {
        self.resize_percentage = resize_percentage;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_content(mut self, offset: Point, size: Size) -> Self {
        self.content = Some(ContentConfig { offset, size });
        self
    }

    /// Content geometry to start from, falling back to a frame-sized layer.
    pub fn content_or_default(&self) -> ContentConfig {
        self.content.unwrap_or(ContentConfig {
            offset: Point::ORIGIN,
            size: self.size,
        })
    }

    /// Check construction preconditions.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition: non-finite values,
    /// non-positive frame or content size, non-positive minimum area,
    /// a zoom step outside `(0, 1)`, or an initial frame already smaller
    /// than the minimum area.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.position.is_finite() {
            return Err(ConfigError::NonFiniteValue("position"));
        }
        if !self.size.is_finite() {
            return Err(ConfigError::NonFiniteValue("size"));
        }
        if !self.rotation.is_finite() {
            return Err(ConfigError::NonFiniteValue("rotation"));
        }
        if !self.min_area.is_finite() {
            return Err(ConfigError::NonFiniteValue("min_area"));
        }
        if !self.resize_percentage.is_finite() {
            return Err(ConfigError::NonFiniteValue("resize_percentage"));
        }

        if !self.size.is_positive() {
            return Err(ConfigError::NonPositiveSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        if self.min_area <= 0.0 {
            return Err(ConfigError::NonPositiveMinArea(self.min_area));
        }
        if self.resize_percentage <= 0.0 || self.resize_percentage >= 1.0 {
            return Err(ConfigError::InvalidResizePercentage(self.resize_percentage));
        }
        if self.size.area() < self.min_area {
            return Err(ConfigError::AreaBelowMinimum {
                area: self.size.area(),
                min_area: self.min_area,
            });
        }

        if let Some(content) = &self.content {
            if !content.offset.is_finite() {
                return Err(ConfigError::NonFiniteValue("content.offset"));
            }
            if !content.size.is_finite() {
                return Err(ConfigError::NonFiniteValue("content.size"));
            }
            if !content.size.is_positive() {
                return Err(ConfigError::NonPositiveContentSize {
                    width: content.size.width,
                    height: content.size.height,
                });
            }
        }

        Ok(())
    }
}
