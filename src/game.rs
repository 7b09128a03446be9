//! Session setup.
//!
//! [`build_world`] validates the configuration, inserts the session
//! resources, registers the observers and runs [`setup`] to spawn both
//! players. [`headless_schedule`] is the per-frame schedule used without a
//! window; the windowed schedule adds keyboard input and rendering on top.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use log::{error, info};

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerSlot};
use crate::components::screenposition::ScreenPosition;
use crate::components::wander::Wander;
use crate::error::ConfigError;
use crate::events::pause::toggle_pause_observer;
use crate::events::splitscreen::observe_split_changed;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::autopilot::Autopilot;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::splitframe::{SplitFrameRes, SplitHistory};
use crate::resources::worldtime::WorldTime;
use crate::splitscreen::{SplitFrame, SplitTracker, ViewportState};
use crate::systems::autopilot::autopilot_system;
use crate::systems::movement::player_movement;
use crate::systems::pause::not_paused;
use crate::systems::splitscreen::split_screen_system;

/// Spawn both players and reset the split-screen state.
///
/// The cameras start on the merged layout of the start positions so the
/// first split can measure pivot radii before any frame has run.
pub fn setup(
    mut commands: Commands,
    config: Res<GameConfig>,
    viewport: Res<ViewportState>,
    autopilot: Option<Res<Autopilot>>,
) {
    let starts = config.player_starts();
    let initial = SplitFrame::initial(&viewport, starts);

    for slot in PlayerSlot::all() {
        let i = slot.index();
        let mut player = commands.spawn((
            Player::new(slot),
            MapPosition { pos: starts[i] },
            ScreenPosition::from_vec(initial.screen_positions[i]),
            InputControlled::with_speed(config.player_speed),
        ));
        if let Some(autopilot) = autopilot.as_deref() {
            player.insert(Wander::with_seed(autopilot.seed.wrapping_add(i as u64)));
        }
    }

    commands.insert_resource(SplitTracker::new());
    commands.insert_resource(SplitFrameRes(initial));
    commands.insert_resource(SplitHistory::default());

    info!(
        "Session ready: screen {}x{}, map {}x{}, players at {:?} / {:?}",
        viewport.screen_size.x,
        viewport.screen_size.y,
        viewport.map_size.x,
        viewport.map_size.y,
        starts[0],
        starts[1]
    );
}

/// Build a world ready to run frames.
///
/// Fails only when the configuration does not describe a usable viewport.
pub fn build_world(config: GameConfig, autopilot: Option<u64>) -> Result<World, ConfigError> {
    let viewport = config.viewport()?;

    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(viewport);
    world.insert_resource(config);
    if let Some(seed) = autopilot {
        world.insert_resource(Autopilot { seed });
    }

    world.spawn(Observer::new(observe_split_changed));
    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(toggle_pause_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    if let Err(e) = world.run_system_once(setup) {
        error!("Session setup failed: {}", e);
    }
    Ok(world)
}

/// Frame schedule without a window: autopilot input, movement, split screen.
pub fn headless_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            autopilot_system.run_if(not_paused),
            player_movement.run_if(not_paused),
            split_screen_system.run_if(not_paused),
        )
            .chain(),
    );
    update
}
