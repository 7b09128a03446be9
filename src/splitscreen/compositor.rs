//! Camera offset composition.
//!
//! Offsets are top-left translations applied to each camera's content: a
//! map point `p` is drawn at screen position `p + offset`.
//!
//! While merged both cameras center the midpoint of the two players. While
//! split each player is pushed onto a circle around the screen center, on
//! opposite sides along the axis joining them, with the radius captured in
//! the episode's [`SplitSnapshot`]. `tension` blends between the two layouts.

use glam::Vec2;

use crate::geometry::{Point2D, angle, midpoint};
use crate::splitscreen::tracker::SplitSnapshot;

/// Offset that puts the midpoint of both players at the screen center.
#[inline]
pub fn merged_offset(player1: Point2D, player2: Point2D, screen_center: Point2D) -> Point2D {
    screen_center - midpoint(player1, player2)
}

/// Screen positions the players pivot to while split.
///
/// Player 1 goes to the side opposite the direction of player 2; player 2
/// goes along it.
pub fn pivot_targets(
    player1: Point2D,
    player2: Point2D,
    snapshot: &SplitSnapshot,
    screen_center: Point2D,
) -> [Point2D; 2] {
    let theta = angle(player1, player2);
    let axis = Vec2::new(theta.cos(), theta.sin());
    [
        screen_center - axis * snapshot.player1_distance_from_center,
        screen_center + axis * snapshot.player2_distance_from_center,
    ]
}

/// Per-camera offsets for the fully split layout.
pub fn split_offsets(
    player1: Point2D,
    player2: Point2D,
    snapshot: &SplitSnapshot,
    screen_center: Point2D,
) -> [Point2D; 2] {
    let [target1, target2] = pivot_targets(player1, player2, snapshot, screen_center);
    [target1 - player1, target2 - player2]
}

/// Linear blend from `merged` (tension 0) to `split` (tension 1).
#[inline]
pub fn blend(merged: Point2D, split: Point2D, tension: f32) -> Point2D {
    merged + (split - merged) * tension
}

/// Unclamped offsets for both cameras.
///
/// With no snapshot (merged) both cameras get the merged offset
/// unconditionally.
pub fn compose(
    player1: Point2D,
    player2: Point2D,
    snapshot: Option<&SplitSnapshot>,
    tension: f32,
    screen_center: Point2D,
) -> [Point2D; 2] {
    let merged = merged_offset(player1, player2, screen_center);
    match snapshot {
        None => [merged, merged],
        Some(snapshot) => {
            let [split1, split2] = split_offsets(player1, player2, snapshot, screen_center);
            [
                blend(merged, split1, tension),
                blend(merged, split2, tension),
            ]
        }
    }
}
