//! Input-controlled movement component.
//!
//! [`InputControlled`] is the per-player movement controller: it turns the
//! player's directional input into a new map position each frame. The
//! [`crate::systems::movement`] system calls [`InputControlled::advance`] for
//! every player before the split-screen system reads positions.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::geometry::Rect;
use crate::resources::input::DirectionInput;

/// Movement intent derived from player keyboard input.
///
/// Each field stores the velocity to apply when the corresponding directional
/// input is active.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Velocity when moving up.
    pub up_velocity: Vec2,
    /// Velocity when moving down.
    pub down_velocity: Vec2,
    /// Velocity when moving left.
    pub left_velocity: Vec2,
    /// Velocity when moving right.
    pub right_velocity: Vec2,
}

impl InputControlled {
    /// Create a controller with specified velocities.
    pub fn new(up: Vec2, down: Vec2, left: Vec2, right: Vec2) -> Self {
        Self {
            up_velocity: up,
            down_velocity: down,
            left_velocity: left,
            right_velocity: right,
        }
    }

    /// Same speed in every direction, in map units per second.
    pub fn with_speed(speed: f32) -> Self {
        Self::new(
            Vec2::new(0.0, -speed),
            Vec2::new(0.0, speed),
            Vec2::new(-speed, 0.0),
            Vec2::new(speed, 0.0),
        )
    }

    /// Velocity for the current input. Diagonals are normalized to keep speed
    /// constant.
    pub fn velocity(&self, input: &DirectionInput) -> Vec2 {
        let mut velocity = Vec2::ZERO;
        if input.up.active {
            velocity += self.up_velocity;
        }
        if input.down.active {
            velocity += self.down_velocity;
        }
        if input.left.active {
            velocity += self.left_velocity;
        }
        if input.right.active {
            velocity += self.right_velocity;
        }
        if input.any_vertical() && input.any_horizontal() {
            velocity *= std::f32::consts::FRAC_1_SQRT_2;
        }
        velocity
    }

    /// Move `position` for `dt` seconds of input, keeping it inside `bounds`.
    pub fn advance(&self, position: Vec2, input: &DirectionInput, dt: f32, bounds: &Rect) -> Vec2 {
        bounds.clamp_point(position + self.velocity(input) * dt)
    }
}
