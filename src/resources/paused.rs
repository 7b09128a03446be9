//! Pause marker resource.
//!
//! While present, movement and the split-screen system are skipped, so the
//! split state, snapshot and camera offsets stay exactly as they were on the
//! last computed frame. Rendering keeps drawing that frame.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct Paused {}
