//! Merged/split state machine.
//!
//! The tracker only changes state on strict comparisons of the stretch
//! ratio against 1. On every `Merged -> Split` edge it captures a fresh
//! [`SplitSnapshot`]: how far each player was from the screen center at the
//! moment the view split. Those radii anchor the pivot for the whole split
//! episode and are discarded when the view merges again.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::Serialize;

use crate::geometry::{Point2D, distance};

/// Whether both cameras share a view or each follows its own player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SplitState {
    #[default]
    Merged,
    Split,
}

/// Per-episode pivot radii, captured once on entering [`SplitState::Split`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitSnapshot {
    pub player1_distance_from_center: f32,
    pub player2_distance_from_center: f32,
}

/// State edge produced by a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Transition {
    #[default]
    None,
    /// `Merged -> Split`; a new snapshot was captured.
    Split,
    /// `Split -> Merged`; the snapshot was discarded.
    Merged,
}

/// Normalized separation of the two players.
///
/// Values above 1 mean the players are further apart than the configured
/// threshold on at least one axis.
pub fn stretch_ratio(player1: Point2D, player2: Point2D, threshold: Vec2) -> f32 {
    let delta = (player1 - player2).abs();
    (delta.x / threshold.x).max(delta.y / threshold.y)
}

/// Merged/split state plus the current episode's snapshot.
///
/// Lives in the ECS world as a resource so it persists across frames (and
/// across paused frames, when nothing touches it).
#[derive(Resource, Debug, Clone, Default)]
pub struct SplitTracker {
    state: SplitState,
    snapshot: Option<SplitSnapshot>,
}

impl SplitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SplitState {
        self.state
    }

    pub fn is_split(&self) -> bool {
        self.state == SplitState::Split
    }

    /// The active snapshot. Always `Some` while split, `None` while merged.
    pub fn snapshot(&self) -> Option<SplitSnapshot> {
        self.snapshot
    }

    /// Update the state for this frame's stretch ratio.
    ///
    /// `globals` are the players' current screen-space positions; they are
    /// only read on the `Merged -> Split` edge. A ratio of exactly 1 leaves
    /// the state untouched.
    pub fn evaluate(
        &mut self,
        stretch_ratio: f32,
        globals: [Point2D; 2],
        screen_center: Point2D,
    ) -> Transition {
        if stretch_ratio < 1.0 {
            if self.state == SplitState::Split {
                self.state = SplitState::Merged;
                self.snapshot = None;
                return Transition::Merged;
            }
        } else if stretch_ratio > 1.0 && self.state == SplitState::Merged {
            self.state = SplitState::Split;
            self.snapshot = Some(SplitSnapshot {
                player1_distance_from_center: distance(globals[0], screen_center),
                player2_distance_from_center: distance(globals[1], screen_center),
            });
            return Transition::Split;
        }
        Transition::None
    }
}
