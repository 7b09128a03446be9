//! Splitview main entry point.
//!
//! A two-player dynamic split-screen demo written in Rust using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **raylib** for windowing and graphics (feature `render`)
//!
//! # Main Loop
//!
//! 1. Load and validate `config.ini` (missing file or keys keep defaults)
//! 2. Build the ECS world, register observers and spawn both players
//! 3. Run frames:
//!    - headless: autopilot input, movement and the split-screen system at a
//!      fixed step, optionally dumping every frame as a JSON line
//!    - windowed: keyboard input, movement, split screen and rendering
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --headless --frames 300 --seed 7 --dump
//! cargo run --release --features render
//! ```

// Do not create console on Windows
#![cfg_attr(
    all(target_os = "windows", feature = "render"),
    windows_subsystem = "windows"
)]

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;
use log::{debug, error, info, warn};
use serde::Serialize;
use std::path::PathBuf;

use splitview::components::mapposition::MapPosition;
use splitview::components::player::Player;
use splitview::game::{build_world, headless_schedule};
use splitview::resources::gameconfig::GameConfig;
use splitview::resources::splitframe::{SplitFrameRes, SplitHistory};
use splitview::resources::worldtime::WorldTime;
use splitview::splitscreen::SplitFrame;
use splitview::systems::time::update_world_time;

/// Two-player dynamic split-screen camera
#[derive(Parser)]
#[command(version, about = "Two players, one map: the view splits as they drift apart.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Run without a window, players driven by the autopilot.
    /// Always on when built without the `render` feature.
    #[arg(long)]
    headless: bool,

    /// Number of frames to simulate when headless.
    #[arg(long, value_name = "N", default_value_t = 600)]
    frames: u64,

    /// Autopilot RNG seed. With a window, passing a seed also hands both
    /// players to the autopilot.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Print every headless frame as one JSON line on stdout.
    #[arg(long)]
    dump: bool,
}

/// One line of `--dump` output.
#[derive(Serialize)]
struct FrameDump<'a> {
    frame: u64,
    elapsed: f32,
    players: [Vec2; 2],
    #[serde(flatten)]
    split: &'a SplitFrame,
}

fn load_config(path: PathBuf) -> GameConfig {
    let mut config = GameConfig::with_path(path);
    if config.config_path.exists() {
        if let Err(e) = config.load_from_file() {
            error!("{}", e);
            std::process::exit(1);
        }
    } else {
        warn!(
            "Config file {:?} not found, using defaults",
            config.config_path
        );
    }
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }
    config
}

fn player_positions(world: &mut World) -> [Vec2; 2] {
    let mut positions = [Vec2::ZERO; 2];
    let mut query = world.query::<(&Player, &MapPosition)>();
    for (player, position) in query.iter(world) {
        positions[player.slot.index()] = position.pos;
    }
    positions
}

fn run_headless(mut world: World, frames: u64, dump: bool) {
    let fps = world.resource::<GameConfig>().target_fps.max(1);
    let dt = 1.0 / fps as f32;
    let mut update = headless_schedule();

    info!("Running {} headless frames at dt={:.4}", frames, dt);
    for _ in 0..frames {
        update_world_time(&mut world, dt);
        update.run(&mut world);

        if dump {
            let players = player_positions(&mut world);
            let time = *world.resource::<WorldTime>();
            let frame = &world.resource::<SplitFrameRes>().0;
            let line = FrameDump {
                frame: time.frame_count,
                elapsed: time.elapsed,
                players,
                split: frame,
            };
            match serde_json::to_string(&line) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("Failed to serialize frame {}: {}", time.frame_count, e);
                    break;
                }
            }
        }

        world.clear_trackers();
    }

    let history = *world.resource::<SplitHistory>();
    let frame = &world.resource::<SplitFrameRes>().0;
    info!(
        "Done: {} splits, {} merges, final state {:?}",
        history.splits, history.merges, frame.state
    );
    debug!("Final offsets: {:?}", frame.offsets);
}

#[cfg(feature = "render")]
fn run_windowed(mut world: World) -> Result<(), String> {
    use splitview::resources::input::InputState;
    use splitview::resources::rendertarget::CameraTarget;
    use splitview::systems::autopilot::autopilot_system;
    use splitview::systems::input::update_input_state;
    use splitview::systems::movement::player_movement;
    use splitview::systems::pause::not_paused;
    use splitview::systems::render::render_system;
    use splitview::systems::splitscreen::split_screen_system;

    let config = world.resource::<GameConfig>().clone();
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title("Splitview");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled through InputState
    rl.set_exit_key(None);

    let target = CameraTarget::new(&mut rl, &thread, config.window_width, config.window_height)?;
    world.insert_non_send_resource(target);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            autopilot_system.run_if(not_paused),
            player_movement.run_if(not_paused),
            split_screen_system.run_if(not_paused),
            render_system,
        )
            .chain(),
    );
    update
        .initialize(&mut world)
        .map_err(|e| format!("Failed to initialize schedule: {}", e))?;

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<InputState>().action_back.just_pressed
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();
    }

    let history = *world.resource::<SplitHistory>();
    info!(
        "Window closed after {} splits and {} merges",
        history.splits, history.merges
    );
    Ok(())
}

#[cfg(feature = "render")]
fn run_windowed_or_exit(world: World) {
    if let Err(e) = run_windowed(world) {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "render"))]
fn run_windowed_or_exit(_world: World) {
    error!("Built without the `render` feature, run with --headless");
    std::process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config);
    let headless = cli.headless || !cfg!(feature = "render");

    let autopilot = if headless {
        let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));
        info!("Autopilot seed: {}", seed);
        Some(seed)
    } else {
        cli.seed
    };

    let world = match build_world(config, autopilot) {
        Ok(world) => world,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if headless {
        run_headless(world, cli.frames, cli.dump);
        return;
    }

    run_windowed_or_exit(world);
}
