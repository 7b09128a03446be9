//! Split-screen ECS integration tests: movement, split/merge edges, events
//! and pause behaviour through real schedules.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;

use splitview::components::inputcontrolled::InputControlled;
use splitview::components::mapposition::MapPosition;
use splitview::components::player::{Player, PlayerSlot};
use splitview::components::screenposition::ScreenPosition;
use splitview::events::pause::{TogglePauseEvent, toggle_pause_observer};
use splitview::events::splitscreen::observe_split_changed;
use splitview::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use splitview::game::{build_world, headless_schedule};
use splitview::resources::debugmode::DebugMode;
use splitview::resources::gameconfig::GameConfig;
use splitview::resources::input::InputState;
use splitview::resources::paused::Paused;
use splitview::resources::splitframe::{SplitFrameRes, SplitHistory};
use splitview::resources::worldtime::WorldTime;
use splitview::splitscreen::{
    SplitFrame, SplitState, SplitTracker, Transition, ViewportState,
};
use splitview::systems::movement::player_movement;
use splitview::systems::splitscreen::split_screen_system;
use splitview::systems::time::update_world_time;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn viewport() -> ViewportState {
    ViewportState::new(
        Vec2::new(800.0, 600.0),
        Vec2::new(2000.0, 1500.0),
        Vec2::new(400.0, 240.0),
    )
    .unwrap()
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(viewport());
    world.insert_resource(SplitTracker::new());
    world.insert_resource(SplitFrameRes::default());
    world.insert_resource(SplitHistory::default());
    world.spawn(Observer::new(observe_split_changed));
    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(toggle_pause_observer));
    world.flush();
    world
}

/// Spawn both players with the cameras seeded on the merged layout.
fn spawn_players(world: &mut World, a: Vec2, b: Vec2) -> [Entity; 2] {
    let initial = SplitFrame::initial(world.resource::<ViewportState>(), [a, b]);
    let [ga, gb] = initial.screen_positions;
    world.insert_resource(SplitFrameRes(initial));
    let p1 = world
        .spawn((
            Player::new(PlayerSlot::One),
            MapPosition { pos: a },
            ScreenPosition::from_vec(ga),
            InputControlled::with_speed(300.0),
        ))
        .id();
    let p2 = world
        .spawn((
            Player::new(PlayerSlot::Two),
            MapPosition { pos: b },
            ScreenPosition::from_vec(gb),
            InputControlled::with_speed(300.0),
        ))
        .id();
    [p1, p2]
}

fn move_to(world: &mut World, entity: Entity, pos: Vec2) {
    world.get_mut::<MapPosition>(entity).unwrap().pos = pos;
}

fn tick_split(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(split_screen_system);
    schedule.run(world);
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_movement);
    schedule.run(world);
}

fn frame(world: &World) -> SplitFrame {
    world.resource::<SplitFrameRes>().0.clone()
}

#[test]
fn close_players_share_one_camera() {
    let mut world = make_world(1.0 / 60.0);
    let [p1, p2] = spawn_players(&mut world, Vec2::new(900.0, 750.0), Vec2::new(905.0, 750.0));
    tick_split(&mut world);

    let f = frame(&world);
    assert_eq!(f.state, SplitState::Merged);
    assert_eq!(f.offsets.camera1, f.offsets.camera2);
    assert!(vec_approx_eq(f.offsets.camera1, Vec2::new(-502.5, -450.0)));

    // Screen positions are written back as map position + own camera offset.
    let s1 = world.get::<ScreenPosition>(p1).unwrap().pos;
    let s2 = world.get::<ScreenPosition>(p2).unwrap().pos;
    assert!(vec_approx_eq(s1, Vec2::new(397.5, 300.0)));
    assert!(vec_approx_eq(s2, Vec2::new(402.5, 300.0)));
    assert_eq!(world.resource::<SplitHistory>().splits, 0);
}

#[test]
fn far_players_split_and_fire_event() {
    let mut world = make_world(1.0 / 60.0);
    spawn_players(&mut world, Vec2::new(500.0, 750.0), Vec2::new(1300.0, 750.0));
    tick_split(&mut world);

    let f = frame(&world);
    assert_eq!(f.state, SplitState::Split);
    assert_eq!(f.transition, Transition::Split);
    assert!(approx_eq(f.tension, 1.0));
    let snap = f.snapshot.unwrap();
    assert!(approx_eq(snap.player1_distance_from_center, 400.0));
    assert!(approx_eq(snap.player2_distance_from_center, 400.0));
    assert!(f.divider.is_some());
    assert_eq!(f.clip.as_ref().map(|c| c.len()), Some(4));

    assert_eq!(
        *world.resource::<SplitHistory>(),
        SplitHistory {
            splits: 1,
            merges: 0
        }
    );
    assert!(world.resource::<SplitTracker>().is_split());
}

#[test]
fn staying_split_does_not_refire() {
    let mut world = make_world(1.0 / 60.0);
    let [p1, _] = spawn_players(&mut world, Vec2::new(500.0, 750.0), Vec2::new(1300.0, 750.0));
    tick_split(&mut world);
    let first = frame(&world).snapshot;

    move_to(&mut world, p1, Vec2::new(450.0, 700.0));
    tick_split(&mut world);

    let f = frame(&world);
    assert_eq!(f.transition, Transition::None);
    assert_eq!(f.snapshot, first);
    assert_eq!(world.resource::<SplitHistory>().splits, 1);
}

#[test]
fn merging_back_counts_merge_and_clears_divider() {
    let mut world = make_world(1.0 / 60.0);
    let [p1, p2] = spawn_players(&mut world, Vec2::new(500.0, 750.0), Vec2::new(1300.0, 750.0));
    tick_split(&mut world);

    move_to(&mut world, p1, Vec2::new(900.0, 750.0));
    move_to(&mut world, p2, Vec2::new(950.0, 750.0));
    tick_split(&mut world);

    let f = frame(&world);
    assert_eq!(f.state, SplitState::Merged);
    assert_eq!(f.transition, Transition::Merged);
    assert!(f.divider.is_none());
    assert!(f.clip.is_none());
    assert_eq!(
        *world.resource::<SplitHistory>(),
        SplitHistory {
            splits: 1,
            merges: 1
        }
    );
}

#[test]
fn resplit_measures_radii_through_previous_offsets() {
    let mut world = make_world(1.0 / 60.0);
    let [p1, p2] = spawn_players(&mut world, Vec2::new(500.0, 750.0), Vec2::new(1300.0, 750.0));
    tick_split(&mut world);

    // Merge with players 200 apart, centered at (900, 750): offset (-500, -450).
    move_to(&mut world, p1, Vec2::new(800.0, 750.0));
    move_to(&mut world, p2, Vec2::new(1000.0, 750.0));
    tick_split(&mut world);
    assert_eq!(frame(&world).state, SplitState::Merged);
    assert!(vec_approx_eq(frame(&world).offsets.camera1, Vec2::new(-500.0, -450.0)));

    // Player 1 moves on the splitting frame and is measured at its new spot.
    move_to(&mut world, p1, Vec2::new(500.0, 750.0));
    tick_split(&mut world);
    let snap = frame(&world).snapshot.unwrap();
    assert!(approx_eq(snap.player1_distance_from_center, 400.0));
    assert!(approx_eq(snap.player2_distance_from_center, 100.0));
    assert_eq!(world.resource::<SplitHistory>().splits, 2);
}

#[test]
fn players_moving_apart_on_split_frame_keep_wide_pivots() {
    let mut world = make_world(1.0 / 60.0);
    let [p1, p2] = spawn_players(&mut world, Vec2::new(900.0, 750.0), Vec2::new(905.0, 750.0));
    tick_split(&mut world);
    assert_eq!(frame(&world).state, SplitState::Merged);

    move_to(&mut world, p1, Vec2::new(500.0, 750.0));
    move_to(&mut world, p2, Vec2::new(1300.0, 750.0));
    tick_split(&mut world);

    let f = frame(&world);
    assert_eq!(f.transition, Transition::Split);
    let snap = f.snapshot.unwrap();
    assert!(approx_eq(snap.player1_distance_from_center, 402.5));
    assert!(approx_eq(snap.player2_distance_from_center, 397.5));
}

#[test]
fn movement_follows_slot_input_and_stays_on_map() {
    let mut world = make_world(10.0);
    let [p1, p2] = spawn_players(&mut world, Vec2::new(100.0, 100.0), Vec2::new(1900.0, 1400.0));
    {
        let mut input = world.resource_mut::<InputState>();
        input.players[0].left.set(true);
        input.players[1].down.set(true);
    }
    tick_movement(&mut world);

    assert_eq!(world.get::<MapPosition>(p1).unwrap().pos, Vec2::new(0.0, 100.0));
    assert_eq!(world.get::<MapPosition>(p2).unwrap().pos, Vec2::new(1900.0, 1500.0));
}

#[test]
fn paused_frames_keep_split_state() {
    let mut world = make_world(1.0 / 60.0);
    let [p1, p2] = spawn_players(&mut world, Vec2::new(500.0, 750.0), Vec2::new(1300.0, 750.0));
    let mut update = headless_schedule();
    update.run(&mut world);
    let before = frame(&world);
    let screen_before = world.get::<ScreenPosition>(p1).unwrap().pos;

    world.trigger(TogglePauseEvent {});
    world.flush();
    assert!(world.contains_resource::<Paused>());

    move_to(&mut world, p1, Vec2::new(900.0, 750.0));
    move_to(&mut world, p2, Vec2::new(905.0, 750.0));
    world.resource_mut::<InputState>().players[0].right.set(true);
    for _ in 0..10 {
        update.run(&mut world);
    }

    assert_eq!(frame(&world), before);
    assert!(world.resource::<SplitTracker>().is_split());
    assert_eq!(world.get::<ScreenPosition>(p1).unwrap().pos, screen_before);
    assert_eq!(world.get::<MapPosition>(p1).unwrap().pos, Vec2::new(900.0, 750.0));

    world.trigger(TogglePauseEvent {});
    world.flush();
    update.run(&mut world);
    assert_eq!(frame(&world).state, SplitState::Merged);
}

#[test]
fn debug_event_toggles_overlay() {
    let mut world = make_world(1.0 / 60.0);
    assert!(!world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(!world.contains_resource::<DebugMode>());
}

#[test]
fn built_world_starts_merged_at_configured_positions() {
    let mut world = build_world(GameConfig::new(), None).unwrap();
    let mut query = world.query::<(&Player, &MapPosition, &ScreenPosition)>();
    let mut players: Vec<_> = query
        .iter(&world)
        .map(|(p, m, s)| (p.slot, m.pos, s.pos))
        .collect();
    players.sort_by_key(|(slot, _, _)| *slot);

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].1, Vec2::new(360.0, 300.0));
    assert_eq!(players[1].1, Vec2::new(440.0, 300.0));
    // The start positions are centered on the screen, so the merged offset is zero.
    assert_eq!(players[0].2, players[0].1);
    assert_eq!(players[1].2, players[1].1);
    assert_eq!(world.resource::<SplitTracker>().state(), SplitState::Merged);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = GameConfig::new();
    config.map_scale = 0.5;
    assert!(build_world(config, None).is_err());
}

fn run_autopilot(seed: u64, frames: usize) -> Vec<SplitFrame> {
    let mut world = build_world(GameConfig::new(), Some(seed)).unwrap();
    let mut update = headless_schedule();
    let mut frames_out = Vec::with_capacity(frames);
    for _ in 0..frames {
        update_world_time(&mut world, 1.0 / 60.0);
        update.run(&mut world);
        frames_out.push(frame(&world));
    }
    frames_out
}

#[test]
fn autopilot_runs_are_reproducible_and_in_bounds() {
    let a = run_autopilot(99, 600);
    let b = run_autopilot(99, 600);
    assert_eq!(a, b);

    for f in &a {
        for off in f.offsets.as_array() {
            assert!(off.x <= 0.0 && off.x >= -1200.0);
            assert!(off.y <= 0.0 && off.y >= -900.0);
        }
        assert!((0.0..=1.0).contains(&f.tension));
        assert_eq!(f.snapshot.is_some(), f.state == SplitState::Split);
        if f.state == SplitState::Merged {
            assert_eq!(f.offsets.camera1, f.offsets.camera2);
            assert!(f.divider.is_none());
        }
    }
}

#[test]
fn world_time_counts_frames() {
    let mut world = make_world(0.0);
    for _ in 0..3 {
        update_world_time(&mut world, 0.5);
    }
    let time = *world.resource::<WorldTime>();
    assert_eq!(time.frame_count, 3);
    assert!(approx_eq(time.elapsed, 1.5));
    assert!(approx_eq(time.delta, 0.5));
}
