//! Per-frame split-screen camera core.
//!
//! Given both players' positions on a shared map, [`update_frame`] decides
//! whether the view is merged or split, composes each camera's offset,
//! builds the divider line and camera 2's clip polygon, and clamps the
//! offsets to the map. Nothing here draws; the result is a [`SplitFrame`]
//! the renderer applies verbatim.
//!
//! Submodules:
//! - [`tracker`] – merged/split state machine and pivot snapshot
//! - [`compositor`] – merged, pivoted and blended camera offsets
//! - [`divider`] – edge crossings, divider line and clip polygon
//! - [`clamp`] – keeps offsets inside the map

pub mod clamp;
pub mod compositor;
pub mod divider;
pub mod tracker;

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::Serialize;

use crate::error::ConfigError;
use crate::geometry::{Point2D, ProgressRange, Rect, angle};

pub use clamp::clamp_offset;
pub use divider::{ClipPolygon, DividerLine, EdgeHits};
pub use tracker::{SplitSnapshot, SplitState, SplitTracker, Transition, stretch_ratio};

/// Stretch ratio at which the split layout starts to blend in.
pub const TENSION_START: f32 = 1.0;
/// Stretch ratio at which the split layout is fully applied.
pub const TENSION_END: f32 = 1.5;

/// Session constants for the split view. Fixed once the session starts.
#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
pub struct ViewportState {
    /// Screen (viewport) size in pixels.
    pub screen_size: Vec2,
    /// Map size in map units.
    pub map_size: Vec2,
    /// Per-axis player separation at which the view splits.
    pub stretch_threshold: Vec2,
    /// Stretch ratios mapped to tension 0..1.
    pub tension: ProgressRange,
    /// Divider line width in pixels.
    pub line_width: f32,
    /// Divider line color as `0xRRGGBB`.
    pub line_color: u32,
}

impl ViewportState {
    /// Validate and build the viewport constants.
    pub fn new(screen_size: Vec2, map_size: Vec2, stretch_threshold: Vec2) -> Result<Self, ConfigError> {
        Rect::from_size(screen_size).map_err(|_| ConfigError::InvalidSize {
            what: "screen",
            width: screen_size.x,
            height: screen_size.y,
        })?;
        Rect::from_size(map_size).map_err(|_| ConfigError::InvalidSize {
            what: "map",
            width: map_size.x,
            height: map_size.y,
        })?;
        if !(stretch_threshold.x > 0.0 && stretch_threshold.y > 0.0) {
            return Err(ConfigError::InvalidThreshold {
                x: stretch_threshold.x,
                y: stretch_threshold.y,
            });
        }
        Ok(Self {
            screen_size,
            map_size,
            stretch_threshold,
            tension: ProgressRange::new(TENSION_START, TENSION_END)?,
            line_width: 10.0,
            line_color: 0xFF0000,
        })
    }

    /// Replace the divider line style.
    pub fn with_line(mut self, width: f32, color: u32) -> Result<Self, ConfigError> {
        if !(width > 0.0) {
            return Err(ConfigError::InvalidLineWidth(width));
        }
        self.line_width = width;
        self.line_color = color;
        Ok(self)
    }

    pub fn screen_center(&self) -> Point2D {
        self.screen_size * 0.5
    }

    /// Playfield bounds in map space, anchored at the origin.
    pub fn map_rect(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.map_size.x,
            height: self.map_size.y,
        }
    }

    pub fn clamp(&self, offset: Point2D) -> Point2D {
        clamp_offset(offset, self.screen_size, self.map_size)
    }
}

/// A player's position in map space and on screen.
///
/// The global position is this frame's map position seen through the
/// camera offset of the previous frame, i.e. where the player would be drawn
/// before the cameras move.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PlayerState {
    pub local_position: Point2D,
    pub global_position: Point2D,
}

impl PlayerState {
    pub fn new(local_position: Point2D, global_position: Point2D) -> Self {
        Self {
            local_position,
            global_position,
        }
    }

    /// Player at `local_position` seen through `previous_offset`.
    pub fn with_offset(local_position: Point2D, previous_offset: Point2D) -> Self {
        Self::new(local_position, local_position + previous_offset)
    }
}

/// Clamped top-left translation of each camera's content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CameraOffsets {
    pub camera1: Point2D,
    pub camera2: Point2D,
}

impl CameraOffsets {
    /// Both cameras on the clamped merged layout of `locals`.
    pub fn merged(viewport: &ViewportState, locals: [Point2D; 2]) -> Self {
        let offset = viewport.clamp(compositor::merged_offset(
            locals[0],
            locals[1],
            viewport.screen_center(),
        ));
        Self {
            camera1: offset,
            camera2: offset,
        }
    }

    pub fn as_array(&self) -> [Point2D; 2] {
        [self.camera1, self.camera2]
    }

    /// Player states for `locals` seen through these offsets.
    pub fn players(&self, locals: [Point2D; 2]) -> [PlayerState; 2] {
        [
            PlayerState::with_offset(locals[0], self.camera1),
            PlayerState::with_offset(locals[1], self.camera2),
        ]
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SplitFrame {
    pub state: SplitState,
    pub transition: Transition,
    pub stretch_ratio: f32,
    /// Blend factor between merged (0) and fully split (1) layouts.
    pub tension: f32,
    pub offsets: CameraOffsets,
    /// Where each player ends up on screen with this frame's offsets.
    pub screen_positions: [Point2D; 2],
    pub divider: Option<DividerLine>,
    /// Divider line opacity, equal to `tension` while split.
    pub divider_opacity: f32,
    /// Camera 2's clip region. `None` means unclipped.
    pub clip: Option<ClipPolygon>,
    pub snapshot: Option<SplitSnapshot>,
}

impl SplitFrame {
    /// The frame before the first update: merged, both cameras on the
    /// clamped merged layout of the start positions.
    pub fn initial(viewport: &ViewportState, locals: [Point2D; 2]) -> Self {
        Self {
            offsets: CameraOffsets::merged(viewport, locals),
            screen_positions: merged_screen_positions(viewport, locals),
            ..Self::default()
        }
    }
}

/// Screen positions for two players under the clamped merged layout.
pub fn merged_screen_positions(viewport: &ViewportState, locals: [Point2D; 2]) -> [Point2D; 2] {
    let offsets = CameraOffsets::merged(viewport, locals);
    [locals[0] + offsets.camera1, locals[1] + offsets.camera2]
}

/// Run the split-screen core for one frame.
pub fn update_frame(
    tracker: &mut SplitTracker,
    viewport: &ViewportState,
    players: [PlayerState; 2],
) -> SplitFrame {
    let [player1, player2] = players;
    let (local1, local2) = (player1.local_position, player2.local_position);
    let globals = [player1.global_position, player2.global_position];
    let screen_center = viewport.screen_center();

    let ratio = stretch_ratio(local1, local2, viewport.stretch_threshold);
    let transition = tracker.evaluate(ratio, globals, screen_center);
    let snapshot = tracker.snapshot();

    let mut frame = SplitFrame {
        state: tracker.state(),
        transition,
        stretch_ratio: ratio,
        snapshot,
        ..SplitFrame::default()
    };

    let tension = if snapshot.is_some() {
        viewport.tension.progress(ratio)
    } else {
        0.0
    };
    let [offset1, offset2] =
        compositor::compose(local1, local2, snapshot.as_ref(), tension, screen_center);

    if snapshot.is_some() {
        let hits = divider::split_points(angle(local1, local2), viewport.screen_size);
        frame.divider = divider::divider_line(&hits);
        frame.clip = Some(divider::clip_polygon(&hits, globals, viewport.screen_size));
        frame.divider_opacity = tension;
        if frame.divider.is_none() {
            log::warn!("Divider missed the viewport this frame: {:?}", hits);
        }
    }

    frame.tension = tension;
    frame.offsets = CameraOffsets {
        camera1: viewport.clamp(offset1),
        camera2: viewport.clamp(offset2),
    };
    frame.screen_positions = [local1 + frame.offsets.camera1, local2 + frame.offsets.camera2];
    frame
}
