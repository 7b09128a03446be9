//! Splitview library.
//!
//! A two-player dynamic split-screen camera. Both players share one map;
//! while they are close a single merged camera frames them both, and as they
//! drift apart the view splits along a rotating divider perpendicular to the
//! line between them, blending smoothly between the two layouts.
//!
//! The camera math lives in [`splitscreen`] and is free of ECS and rendering
//! concerns. The ECS components, resources, systems and events around it are
//! exposed for integration tests and for the `splitview` binary.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod resources;
pub mod splitscreen;
pub mod systems;
