//! Event types and observers.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`pause`] – freeze and resume the simulation
//! - [`splitscreen`] – split/merge notifications from the split-screen system
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod pause;
pub mod splitscreen;
pub mod switchdebug;
