//! World-space position component.
//!
//! [`MapPosition`] is where an entity sits on the shared map. For players
//! this is the "local" position the movement controller writes each frame
//! and the split-screen core reads.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}
