//! 2D geometry helpers shared by the split-screen core.
//!
//! Coordinates follow screen conventions: origin at the top-left, X grows to
//! the right and Y grows downward. All functions are pure.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A point (or offset) on the playfield or the screen.
pub type Point2D = Vec2;

/// Axis-aligned rectangle, used for the playfield bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle. Width and height must be strictly positive.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ConfigError::InvalidSize {
                what: "rect",
                width,
                height,
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Rectangle anchored at the origin with the given size.
    pub fn from_size(size: Vec2) -> Result<Self, ConfigError> {
        Self::new(0.0, 0.0, size.x, size.y)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.min() + self.size() * 0.5
    }

    /// Closest point inside the rectangle.
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point2D, b: Point2D) -> f32 {
    let d = b - a;
    (d.x * d.x + d.y * d.y).sqrt()
}

/// Angle of the vector from `a` to `b`, in radians within (-π, π].
#[inline]
pub fn angle(a: Point2D, b: Point2D) -> f32 {
    let d = b - a;
    d.y.atan2(d.x)
}

/// Midpoint between two points.
#[inline]
pub fn midpoint(a: Point2D, b: Point2D) -> Point2D {
    (a + b) * 0.5
}

/// Intersection point of segments `p1-p2` and `p3-p4`.
///
/// Returns `None` for parallel or collinear segments, and when the crossing
/// falls outside the open interval (0, 1) on either segment. Touching an
/// endpoint exactly does not count as an intersection.
pub fn segment_intersection(
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
    p4: Point2D,
) -> Option<Point2D> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let denominator = d2.y * d1.x - d2.x * d1.y;
    if denominator == 0.0 {
        return None;
    }

    let a = p1.y - p3.y;
    let b = p1.x - p3.x;
    let ua = (d2.x * a - d2.y * b) / denominator;
    let ub = (d1.x * a - d1.y * b) / denominator;

    if ua > 0.0 && ua < 1.0 && ub > 0.0 && ub < 1.0 {
        Some(p1 + d1 * ua)
    } else {
        None
    }
}

/// Normalized progress of `value` through the span `[min, max]`.
///
/// The result is clamped to `[0, 1]` on both ends. The span must be
/// non-empty; use [`ProgressRange`] when the bounds come from configuration.
#[inline]
pub fn progress(min: f32, max: f32, value: f32) -> f32 {
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// A validated `[min, max]` span for [`progress`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressRange {
    min: f32,
    max: f32,
}

impl ProgressRange {
    /// Build a range, rejecting `max <= min`.
    pub fn new(min: f32, max: f32) -> Result<Self, ConfigError> {
        if max > min {
            Ok(Self { min, max })
        } else {
            Err(ConfigError::EmptyRange { min, max })
        }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn progress(&self, value: f32) -> f32 {
        progress(self.min, self.max, value)
    }
}
