//! Pause toggle event and observer.
//!
//! Emitting a [`TogglePauseEvent`] flips the presence of the [`Paused`]
//! resource. The update schedule skips movement and the split-screen system
//! while it is present.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::paused::Paused;

#[derive(Event, Debug, Clone, Copy)]
pub struct TogglePauseEvent {}

pub fn toggle_pause_observer(
    _trigger: On<TogglePauseEvent>,
    mut commands: Commands,
    paused: Option<Res<Paused>>,
) {
    if paused.is_some() {
        commands.remove_resource::<Paused>();
        info!("Resumed");
    } else {
        commands.insert_resource(Paused {});
        info!("Paused");
    }
}
