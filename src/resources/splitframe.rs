//! Latest split-screen output.
//!
//! Wraps the core's [`SplitFrame`] so the renderer (or the headless frame
//! dump) can read this frame's camera offsets, divider and clip polygon.

use bevy_ecs::prelude::Resource;

use crate::splitscreen::SplitFrame;

/// ECS resource holding the most recently computed [`SplitFrame`].
#[derive(Resource, Debug, Clone, Default)]
pub struct SplitFrameRes(pub SplitFrame);

/// Running count of split and merge edges this session.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitHistory {
    pub splits: u32,
    pub merges: u32,
}
