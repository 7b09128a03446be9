//! Keeps camera offsets inside the map so the view never shows past its edges.

use glam::Vec2;

use crate::geometry::Point2D;

/// Clamp an offset to `[-(map - screen), 0]` per axis.
///
/// If the map is smaller than the screen on an axis the range collapses to
/// `0` on that axis (the map is pinned to the top-left).
#[inline]
pub fn clamp_offset(offset: Point2D, screen: Vec2, map: Vec2) -> Point2D {
    let min = (screen - map).min(Vec2::ZERO);
    offset.clamp(min, Vec2::ZERO)
}
