//! Headless input source.
//!
//! Writes each [`Wander`] player's heading into its slot of
//! [`InputState`], standing in for the keyboard when no window exists.
use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::components::wander::Wander;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn autopilot_system(
    mut query: Query<(&Player, &mut Wander)>,
    mut input: ResMut<InputState>,
    time: Res<WorldTime>,
) {
    for (player, mut wander) in query.iter_mut() {
        let [up, down, left, right] = wander.tick(time.delta);
        let keys = &mut input.players[player.slot.index()];
        keys.up.set(up);
        keys.down.set(down);
        keys.left.set(left);
        keys.right.set(right);
    }
}
