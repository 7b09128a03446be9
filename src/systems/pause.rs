//! Run conditions tied to the [`Paused`] marker.
use bevy_ecs::prelude::*;

use crate::resources::paused::Paused;

pub fn not_paused(paused: Option<Res<Paused>>) -> bool {
    paused.is_none()
}
