//! Player movement system.
//!
//! Moves every player by its [`InputControlled`] controller using the
//! direction keys of its slot, keeping positions inside the map.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::splitscreen::ViewportState;

pub fn player_movement(
    mut query: Query<(&Player, &InputControlled, &mut MapPosition)>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    viewport: Res<ViewportState>,
) {
    let bounds = viewport.map_rect();
    for (player, controller, mut position) in query.iter_mut() {
        let keys = &input.players[player.slot.index()];
        position.pos = controller.advance(position.pos, keys, time.delta, &bounds);
    }
}
