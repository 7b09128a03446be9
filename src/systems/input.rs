//! Keyboard input system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`InputState`]. Pressing the debug or pause key
//! triggers [`SwitchDebugEvent`] or [`TogglePauseEvent`].
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::pause::TogglePauseEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{InputState, Key};

/// Raylib key code for a binding.
pub fn keyboard_key(key: Key) -> KeyboardKey {
    match key {
        Key::W => KeyboardKey::KEY_W,
        Key::A => KeyboardKey::KEY_A,
        Key::S => KeyboardKey::KEY_S,
        Key::D => KeyboardKey::KEY_D,
        Key::Up => KeyboardKey::KEY_UP,
        Key::Down => KeyboardKey::KEY_DOWN,
        Key::Left => KeyboardKey::KEY_LEFT,
        Key::Right => KeyboardKey::KEY_RIGHT,
        Key::P => KeyboardKey::KEY_P,
        Key::Escape => KeyboardKey::KEY_ESCAPE,
        Key::F11 => KeyboardKey::KEY_F11,
        Key::Null => KeyboardKey::KEY_NULL,
    }
}

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: Key| key != Key::Null && rl.is_key_down(keyboard_key(key));

    for keys in input.players.iter_mut() {
        keys.up.set(is_key_down(keys.up.key_binding));
        keys.down.set(is_key_down(keys.down.key_binding));
        keys.left.set(is_key_down(keys.left.key_binding));
        keys.right.set(is_key_down(keys.right.key_binding));
    }

    let binding = input.pause.key_binding;
    input.pause.set(is_key_down(binding));
    let binding = input.mode_debug.key_binding;
    input.mode_debug.set(is_key_down(binding));
    let binding = input.action_back.key_binding;
    input.action_back.set(is_key_down(binding));

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.pause.just_pressed {
        commands.trigger(TogglePauseEvent {});
    }
}
