//! Configuration errors.
//!
//! Everything that runs per frame is infallible; the only failures the crate
//! reports come from session setup, when the configuration is loaded and
//! validated. [`ConfigError`] covers both cases.

use std::fmt;

/// Reason a session configuration was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A width or height was zero, negative or not finite.
    InvalidSize {
        what: &'static str,
        width: f32,
        height: f32,
    },
    /// The map scale would make the map smaller than the window.
    InvalidMapScale(f32),
    /// A stretch threshold axis was not strictly positive.
    InvalidThreshold { x: f32, y: f32 },
    /// A progress range with `max <= min`.
    EmptyRange { min: f32, max: f32 },
    /// The divider line width was not strictly positive.
    InvalidLineWidth(f32),
    /// The divider color could not be parsed as `RRGGBB` hex.
    InvalidColor(String),
    /// The configuration file could not be read or written.
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize {
                what,
                width,
                height,
            } => write!(f, "{what} size must be positive, got {width}x{height}"),
            ConfigError::InvalidMapScale(scale) => {
                write!(f, "map scale must be at least 1.0, got {scale}")
            }
            ConfigError::InvalidThreshold { x, y } => {
                write!(f, "stretch threshold must be positive, got ({x}, {y})")
            }
            ConfigError::EmptyRange { min, max } => {
                write!(f, "range max must be greater than min, got [{min}, {max}]")
            }
            ConfigError::InvalidLineWidth(width) => {
                write!(f, "divider line width must be positive, got {width}")
            }
            ConfigError::InvalidColor(text) => {
                write!(f, "invalid color '{text}', expected RRGGBB hex")
            }
            ConfigError::Io(msg) => write!(f, "config file error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
