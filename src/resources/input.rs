//! Per-frame input resource.
//!
//! Captures the subset of input the session cares about and exposes it to
//! systems via the [`InputState`] resource. Player 1 moves with WASD and
//! player 2 with the arrow keys. The state is written either by the raylib
//! input system or, when running headless, by the autopilot.
use bevy_ecs::prelude::*;
use glam::Vec2;

/// Backend-independent key names used for bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    P,
    Escape,
    F11,
    Null,
}

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: Key,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(Key::Null)
    }
}

impl BoolState {
    /// Inactive state bound to `key`.
    pub fn bound(key: Key) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }

    /// Set the active flag, deriving the edge flags from the previous value.
    pub fn set(&mut self, active: bool) {
        self.just_pressed = active && !self.active;
        self.just_released = !active && self.active;
        self.active = active;
    }
}

/// Four directional keys for one player.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionInput {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
}

impl DirectionInput {
    pub fn bound(up: Key, down: Key, left: Key, right: Key) -> Self {
        Self {
            up: BoolState::bound(up),
            down: BoolState::bound(down),
            left: BoolState::bound(left),
            right: BoolState::bound(right),
        }
    }

    pub fn any_vertical(&self) -> bool {
        self.up.active || self.down.active
    }

    pub fn any_horizontal(&self) -> bool {
        self.left.active || self.right.active
    }

    pub fn release_all(&mut self) {
        self.up.set(false);
        self.down.set(false);
        self.left.set(false);
        self.right.set(false);
    }

    /// Unit-ish direction from the pressed keys (Y+ is down).
    pub fn axis(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up.active {
            v.y -= 1.0;
        }
        if self.down.active {
            v.y += 1.0;
        }
        if self.left.active {
            v.x -= 1.0;
        }
        if self.right.active {
            v.x += 1.0;
        }
        v
    }
}

/// Resource capturing the per-frame input state relevant to the session.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Movement keys, indexed by [`PlayerSlot::index`](crate::components::player::PlayerSlot::index).
    pub players: [DirectionInput; 2],
    pub pause: BoolState,
    pub mode_debug: BoolState,
    pub action_back: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            players: [
                DirectionInput::bound(Key::W, Key::S, Key::A, Key::D),
                DirectionInput::bound(Key::Up, Key::Down, Key::Left, Key::Right),
            ],
            pause: BoolState::bound(Key::P),
            mode_debug: BoolState::bound(Key::F11),
            action_back: BoolState::bound(Key::Escape),
        }
    }
}
