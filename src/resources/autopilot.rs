//! Autopilot switch.
//!
//! When this resource is present at setup, both players get a
//! [`Wander`](crate::components::wander::Wander) component seeded from
//! `seed` (player 2 uses `seed + 1`).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Autopilot {
    pub seed: u64,
}
