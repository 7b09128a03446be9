//! Divider line and camera-2 clip polygon.
//!
//! The divider runs through the screen center, perpendicular to the axis
//! between the players. Because it passes through the center of the viewport
//! it crosses two opposite edges (top/bottom or left/right). Near the
//! diagonals the crossings land on edge endpoints, which
//! [`segment_intersection`] does not count, and float error may keep only
//! one of them. Without an opposite pair that frame has no divider and
//! camera 2's clip polygon is empty.

use arrayvec::ArrayVec;
use glam::Vec2;
use serde::Serialize;

use crate::geometry::{Point2D, segment_intersection};

/// Minimum half-length of the construction segment.
pub const DIVIDER_HALF_LENGTH: f32 = 1000.0;

/// Where the divider crosses each viewport edge, if it does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeHits {
    pub top: Option<Point2D>,
    pub right: Option<Point2D>,
    pub bottom: Option<Point2D>,
    pub left: Option<Point2D>,
}

impl EdgeHits {
    /// Hits in the fixed order top, right, bottom, left.
    pub fn as_array(&self) -> [Option<Point2D>; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    pub fn count(&self) -> usize {
        self.as_array().iter().flatten().count()
    }

    pub fn crosses_left_right(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    pub fn crosses_top_bottom(&self) -> bool {
        self.top.is_some() && self.bottom.is_some()
    }
}

/// Segment drawn between the two edge crossings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DividerLine {
    pub start: Point2D,
    pub end: Point2D,
}

/// Closed polygon confining camera 2's half of the screen.
///
/// The last vertex connects back to the first; it is not repeated. An empty
/// polygon means camera 2 shows nothing this frame.
pub type ClipPolygon = ArrayVec<Point2D, 4>;

/// Intersect the divider for a player axis `theta` with the viewport edges.
pub fn split_points(theta: f32, screen: Vec2) -> EdgeHits {
    let center = screen * 0.5;
    let half_length = DIVIDER_HALF_LENGTH.max(screen.length());
    let normal = Vec2::new(theta.sin(), -theta.cos()) * half_length;
    let start = center + normal;
    let end = center - normal;

    let (w, h) = (screen.x, screen.y);
    let top_left = Vec2::new(0.0, 0.0);
    let top_right = Vec2::new(w, 0.0);
    let bottom_left = Vec2::new(0.0, h);
    let bottom_right = Vec2::new(w, h);

    EdgeHits {
        top: segment_intersection(start, end, top_left, top_right),
        right: segment_intersection(start, end, top_right, bottom_right),
        bottom: segment_intersection(start, end, bottom_left, bottom_right),
        left: segment_intersection(start, end, top_left, bottom_left),
    }
}

/// Line to draw, preferring the left/right pair.
pub fn divider_line(hits: &EdgeHits) -> Option<DividerLine> {
    match *hits {
        EdgeHits {
            right: Some(right),
            left: Some(left),
            ..
        } => Some(DividerLine {
            start: right,
            end: left,
        }),
        EdgeHits {
            top: Some(top),
            bottom: Some(bottom),
            ..
        } => Some(DividerLine {
            start: top,
            end: bottom,
        }),
        _ => None,
    }
}

/// Polygon covering the half of the screen owned by camera 2.
///
/// `globals` are the players' screen positions; the player further along
/// the axis perpendicular to the divider decides which side camera 2 owns.
/// Returns an empty polygon when the hits do not form an opposite pair.
pub fn clip_polygon(hits: &EdgeHits, globals: [Point2D; 2], screen: Vec2) -> ClipPolygon {
    let (w, h) = (screen.x, screen.y);
    let [player1, player2] = globals;

    let corners = if hits.crosses_left_right() {
        if player1.y > player2.y {
            Some((Vec2::new(0.0, 0.0), Vec2::new(w, 0.0)))
        } else {
            Some((Vec2::new(0.0, h), Vec2::new(w, h)))
        }
    } else if hits.crosses_top_bottom() {
        if player1.x > player2.x {
            Some((Vec2::new(0.0, 0.0), Vec2::new(0.0, h)))
        } else {
            Some((Vec2::new(w, 0.0), Vec2::new(w, h)))
        }
    } else {
        None
    };

    let mut polygon = ClipPolygon::new();
    let Some((corner1, corner2)) = corners else {
        return polygon;
    };

    polygon.push(corner1);
    for hit in [hits.top, hits.bottom, hits.left, hits.right]
        .into_iter()
        .flatten()
    {
        // Opposite pairs only, so at most two of these are present.
        if polygon.len() < 3 {
            polygon.push(hit);
        }
    }
    polygon.push(corner2);
    polygon
}

/// Signed area (shoelace), positive for clockwise polygons in screen space.
pub fn polygon_area(polygon: &[Point2D]) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}
