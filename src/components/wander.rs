//! Autopilot component for headless runs.
//!
//! A [`Wander`] player picks a random set of held direction keys, keeps them
//! for a random interval and then picks again. The
//! [`autopilot`](crate::systems::autopilot) system writes the choice into
//! [`InputState`](crate::resources::input::InputState) so the movement
//! controller sees the same input it would get from a keyboard.

use bevy_ecs::prelude::Component;
use fastrand::Rng;

/// Shortest time a heading is held, in seconds.
pub const MIN_HOLD: f32 = 0.4;
/// Longest time a heading is held, in seconds.
pub const MAX_HOLD: f32 = 2.5;

/// Held directions, in the order up, down, left, right.
pub type Heading = [bool; 4];

#[derive(Component, Clone, Debug)]
pub struct Wander {
    rng: Rng,
    heading: Heading,
    hold_remaining: f32,
}

impl Wander {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
            heading: [false; 4],
            hold_remaining: 0.0,
        }
    }

    /// Advance the hold timer by `dt` and return the heading for this frame.
    pub fn tick(&mut self, dt: f32) -> Heading {
        self.hold_remaining -= dt;
        if self.hold_remaining <= 0.0 {
            self.retarget();
        }
        self.heading
    }

    fn retarget(&mut self) {
        // Never hold opposite keys together.
        let vertical = self.rng.u8(0..3);
        let horizontal = self.rng.u8(0..3);
        self.heading = [vertical == 1, vertical == 2, horizontal == 1, horizontal == 2];
        self.hold_remaining = MIN_HOLD + self.rng.f32() * (MAX_HOLD - MIN_HOLD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_picks_heading() {
        let mut w = Wander::with_seed(7);
        w.tick(0.016);
        assert!(w.hold_remaining >= MIN_HOLD && w.hold_remaining <= MAX_HOLD);
    }

    #[test]
    fn test_never_opposite_keys() {
        let mut w = Wander::with_seed(42);
        for _ in 0..500 {
            let [up, down, left, right] = w.tick(1.0);
            assert!(!(up && down));
            assert!(!(left && right));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Wander::with_seed(3);
        let mut b = Wander::with_seed(3);
        for _ in 0..50 {
            assert_eq!(a.tick(0.5), b.tick(0.5));
        }
    }

    #[test]
    fn test_heading_held_until_timer_expires() {
        let mut w = Wander::with_seed(11);
        let first = w.tick(0.0);
        let held = w.tick(MIN_HOLD * 0.5);
        assert_eq!(first, held);
    }
}
