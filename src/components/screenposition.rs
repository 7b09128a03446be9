//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores where an entity is drawn this
//! frame, in screen pixels: map position plus the offset of the camera that
//! follows it. The split-screen system writes it at the end of every frame
//! and the debug overlay marks it.
//!
//! For world-space positions, see
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Screen-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vec2,
}

impl ScreenPosition {
    /// Create a ScreenPosition from an existing Vec2.
    pub fn from_vec(pos: Vec2) -> Self {
        Self { pos }
    }
}
