//! Session systems.
//!
//! This module groups all ECS systems that advance input, movement, the
//! split-screen camera and rendering.
//!
//! Submodules overview
//! - [`autopilot`] – drive players from their `Wander` component when headless
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`] (feature `render`)
//! - [`movement`] – move players from input, clamped to the map
//! - [`pause`] – run conditions for the pause toggle
//! - [`render`] – draw both cameras, the divider and debug overlays using Raylib (feature `render`)
//! - [`splitscreen`] – run the split-screen core and publish the frame
//! - [`time`] – update simulation time and delta

pub mod autopilot;
#[cfg(feature = "render")]
pub mod input;
pub mod movement;
pub mod pause;
#[cfg(feature = "render")]
pub mod render;
pub mod splitscreen;
pub mod time;
