//! Player identity component.
//!
//! Exactly two players exist per session. The slot decides which camera
//! follows the player and which input bindings drive them.

use bevy_ecs::prelude::Component;

/// Which of the two players (and cameras) an entity belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// Index into per-player arrays (0 or 1).
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    pub fn all() -> [PlayerSlot; 2] {
        [PlayerSlot::One, PlayerSlot::Two]
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub slot: PlayerSlot,
}

impl Player {
    pub fn new(slot: PlayerSlot) -> Self {
        Self { slot }
    }
}
