//! Raylib renderer.
//!
//! Applies the latest [`SplitFrame`](crate::splitscreen::SplitFrame)
//! verbatim:
//! 1. camera 2's view goes into the off-screen [`CameraTarget`] while split,
//! 2. camera 1's view fills the screen,
//! 3. camera 2's texture is composited through the clip polygon,
//! 4. the divider is drawn with opacity equal to the tension,
//! 5. the debug overlay is drawn when [`DebugMode`] is present.
use bevy_ecs::prelude::*;
use glam::Vec2;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerSlot};
use crate::components::screenposition::ScreenPosition;
use crate::resources::debugmode::DebugMode;
use crate::resources::paused::Paused;
use crate::resources::rendertarget::CameraTarget;
use crate::resources::splitframe::{SplitFrameRes, SplitHistory};
use crate::splitscreen::divider::polygon_area;
use crate::splitscreen::{ClipPolygon, SplitState, ViewportState};

/// Checker tile edge in map units.
const TILE_SIZE: f32 = 100.0;
const PLAYER_RADIUS: f32 = 14.0;

fn rv(v: Vec2) -> Vector2 {
    Vector2 { x: v.x, y: v.y }
}

fn player_color(slot: PlayerSlot) -> Color {
    match slot {
        PlayerSlot::One => Color::ORANGE,
        PlayerSlot::Two => Color::SKYBLUE,
    }
}

/// `0xRRGGBB` plus an opacity in 0..1.
fn hex_color(rgb: u32, opacity: f32) -> Color {
    Color::new(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
        (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

/// Draw the map through a camera whose content is translated by `offset`.
fn draw_view<D: RaylibDraw>(
    d: &mut D,
    viewport: &ViewportState,
    offset: Vec2,
    players: &[(PlayerSlot, Vec2)],
) {
    d.clear_background(Color::DARKGRAY);

    // Only the tiles under the screen.
    let visible_min = (-offset).max(Vec2::ZERO);
    let visible_max = (viewport.screen_size - offset).min(viewport.map_size);
    let first = (visible_min / TILE_SIZE).floor();
    let last = (visible_max / TILE_SIZE).ceil();

    let mut ty = first.y as i32;
    while (ty as f32) < last.y {
        let mut tx = first.x as i32;
        while (tx as f32) < last.x {
            let color = if (tx + ty) % 2 == 0 {
                Color::RAYWHITE
            } else {
                Color::LIGHTGRAY
            };
            let tile = Vec2::new(tx as f32, ty as f32) * TILE_SIZE;
            let size = (viewport.map_size - tile).min(Vec2::splat(TILE_SIZE));
            d.draw_rectangle_v(rv(tile + offset), rv(size), color);
            tx += 1;
        }
        ty += 1;
    }

    d.draw_rectangle_lines(
        offset.x as i32,
        offset.y as i32,
        viewport.map_size.x as i32,
        viewport.map_size.y as i32,
        Color::BLACK,
    );

    for (slot, pos) in players {
        d.draw_circle_v(rv(*pos + offset), PLAYER_RADIUS, player_color(*slot));
    }
}

/// Draw the camera 2 texture through the clip polygon as a triangle fan.
fn composite_clipped(_d: &mut RaylibDrawHandle, target: &CameraTarget, clip: &ClipPolygon) {
    if clip.len() < 3 {
        return;
    }
    unsafe {
        ffi::rlDisableBackfaceCulling();
        ffi::rlSetTexture(target.texture_id());
        ffi::rlBegin(ffi::RL_TRIANGLES as i32);
        ffi::rlColor4ub(255, 255, 255, 255);
        for i in 1..clip.len() - 1 {
            for p in [clip[0], clip[i], clip[i + 1]] {
                let (u, v) = target.uv(p.x, p.y);
                ffi::rlTexCoord2f(u, v);
                ffi::rlVertex2f(p.x, p.y);
            }
        }
        ffi::rlEnd();
        ffi::rlSetTexture(0);
        ffi::rlEnableBackfaceCulling();
    }
}

fn draw_debug_overlay(
    d: &mut RaylibDrawHandle,
    frame: &crate::splitscreen::SplitFrame,
    screen_positions: &[Vec2],
    history: Option<&SplitHistory>,
    paused: bool,
) {
    let state = match frame.state {
        SplitState::Merged => "merged",
        SplitState::Split => "split",
    };
    let fps = d.get_fps();
    d.draw_text(
        &format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps),
        10,
        10,
        10,
        Color::BLACK,
    );
    d.draw_text(
        &format!(
            "state: {}  ratio: {:.3}  tension: {:.3}{}",
            state,
            frame.stretch_ratio,
            frame.tension,
            if paused { "  [PAUSED]" } else { "" }
        ),
        10,
        30,
        10,
        Color::BLACK,
    );
    d.draw_text(
        &format!(
            "cam1: ({:.1}, {:.1})  cam2: ({:.1}, {:.1})",
            frame.offsets.camera1.x,
            frame.offsets.camera1.y,
            frame.offsets.camera2.x,
            frame.offsets.camera2.y
        ),
        10,
        50,
        10,
        Color::BLACK,
    );
    if let Some(history) = history {
        d.draw_text(
            &format!("splits: {}  merges: {}", history.splits, history.merges),
            10,
            70,
            10,
            Color::BLACK,
        );
    }
    if let Some(clip) = &frame.clip {
        for i in 0..clip.len() {
            let a = clip[i];
            let b = clip[(i + 1) % clip.len()];
            d.draw_line_v(rv(a), rv(b), Color::GREEN);
        }
        d.draw_text(
            &format!("clip area: {:.0}", polygon_area(clip)),
            10,
            90,
            10,
            Color::BLACK,
        );
    }
    for pos in screen_positions {
        d.draw_line(
            pos.x as i32 - 5,
            pos.y as i32,
            pos.x as i32 + 5,
            pos.y as i32,
            Color::GREEN,
        );
        d.draw_line(
            pos.x as i32,
            pos.y as i32 - 5,
            pos.x as i32,
            pos.y as i32 + 5,
            Color::GREEN,
        );
    }
}

pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    thread: NonSend<RaylibThread>,
    mut target: NonSendMut<CameraTarget>,
    viewport: Res<ViewportState>,
    frame: Res<SplitFrameRes>,
    history: Option<Res<SplitHistory>>,
    debug: Option<Res<DebugMode>>,
    paused: Option<Res<Paused>>,
    players: Query<(&Player, &MapPosition, &ScreenPosition)>,
) {
    let frame = &frame.0;
    let mut drawn: Vec<(PlayerSlot, Vec2)> = players
        .iter()
        .map(|(player, position, _)| (player.slot, position.pos))
        .collect();
    drawn.sort_by_key(|(slot, _)| *slot);
    let screen_positions: Vec<Vec2> = players.iter().map(|(_, _, screen)| screen.pos).collect();

    // Camera 2 first, outside the frame's drawing scope.
    if frame.clip.is_some() {
        let target = &mut *target;
        let mut t = rl.begin_texture_mode(&thread, &mut target.texture);
        draw_view(&mut t, &viewport, frame.offsets.camera2, &drawn);
    }

    let mut d = rl.begin_drawing(&thread);
    draw_view(&mut d, &viewport, frame.offsets.camera1, &drawn);

    if let Some(clip) = &frame.clip {
        composite_clipped(&mut d, &target, clip);
    }

    if let Some(line) = &frame.divider {
        d.draw_line_ex(
            rv(line.start),
            rv(line.end),
            viewport.line_width,
            hex_color(viewport.line_color, frame.divider_opacity),
        );
    }

    if debug.is_some() {
        draw_debug_overlay(
            &mut d,
            frame,
            &screen_positions,
            history.as_deref(),
            paused.is_some(),
        );
    }
}
