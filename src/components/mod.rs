//! ECS components for entities.
//!
//! Submodules overview:
//! - [`inputcontrolled`] – per-player movement controller driven by input
//! - [`mapposition`] – world-space (map) position of an entity
//! - [`player`] – player identity and slot (camera 1 or camera 2)
//! - [`screenposition`] – screen-space position, last drawn location
//! - [`wander`] – random autopilot used when running headless

pub mod inputcontrolled;
pub mod mapposition;
pub mod player;
pub mod screenposition;
pub mod wander;
