//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: configuration, input state, timing
//! and the split-screen output. Each submodule documents the semantics and
//! intended usage of its resource(s).
//!
//! Overview
//! - `autopilot` – seeds the headless autopilot when present at setup
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed session configuration
//! - `input` – per-frame keyboard state of keys relevant to the session
//! - `paused` – presence freezes movement and the split-screen system
//! - `rendertarget` – off-screen texture for camera 2 (feature `render`)
//! - `splitframe` – latest split-screen frame and split/merge counters
//! - `worldtime` – simulation time and delta
pub mod autopilot;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod paused;
#[cfg(feature = "render")]
pub mod rendertarget;
pub mod splitframe;
pub mod worldtime;
