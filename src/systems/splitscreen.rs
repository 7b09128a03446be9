//! Split-screen system.
//!
//! Feeds both players' map positions, seen through the previous frame's
//! camera offsets, into [`update_frame`], stores the resulting [`SplitFrame`] in
//! [`SplitFrameRes`], writes each player's new screen position back and
//! triggers a [`SplitChangedEvent`] when the view splits or merges.
//!
//! [`SplitFrame`]: crate::splitscreen::SplitFrame
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::screenposition::ScreenPosition;
use crate::events::splitscreen::SplitChangedEvent;
use crate::resources::splitframe::SplitFrameRes;
use crate::splitscreen::{SplitTracker, Transition, ViewportState, update_frame};

pub fn split_screen_system(
    mut players: Query<(&Player, &MapPosition, &mut ScreenPosition)>,
    mut tracker: ResMut<SplitTracker>,
    viewport: Res<ViewportState>,
    mut frame_res: ResMut<SplitFrameRes>,
    mut commands: Commands,
) {
    let mut locals = [None, None];
    for (player, map, _) in players.iter() {
        locals[player.slot.index()] = Some(map.pos);
    }
    let [Some(local1), Some(local2)] = locals else {
        warn!("Split screen needs both players, skipping frame");
        return;
    };

    // Cameras have not moved yet this frame.
    let previous = frame_res.0.offsets;
    let frame = update_frame(&mut tracker, &viewport, previous.players([local1, local2]));

    for (player, _, mut screen) in players.iter_mut() {
        screen.pos = frame.screen_positions[player.slot.index()];
    }

    if frame.transition != Transition::None {
        commands.trigger(SplitChangedEvent {
            state: frame.state,
            snapshot: frame.snapshot,
        });
    }

    debug!(
        "ratio={:.3} tension={:.3} state={:?}",
        frame.stretch_ratio, frame.tension, frame.state
    );
    frame_res.0 = frame;
}
