//! Game configuration resource.
//!
//! Manages session settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save/validate configuration.
//! Values are read once at startup and are immutable for the session.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! vsync = true
//!
//! [map]
//! scale = 2.5
//!
//! [split]
//! threshold_x = 0.5
//! threshold_y = 0.4
//!
//! [divider]
//! line_width = 10
//! color = FF0000
//!
//! [players]
//! speed = 300
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec2;
use log::info;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::splitscreen::ViewportState;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_MAP_SCALE: f32 = 2.5;
const DEFAULT_THRESHOLD_X: f32 = 0.5;
const DEFAULT_THRESHOLD_Y: f32 = 0.4;
const DEFAULT_LINE_WIDTH: f32 = 10.0;
const DEFAULT_LINE_COLOR: u32 = 0xFF0000;
const DEFAULT_PLAYER_SPEED: f32 = 300.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Map size and stretch threshold are stored relative to the window so a
/// single file works for any resolution; [`GameConfig::viewport`] turns
/// them into absolute session constants.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window (screen) width in pixels.
    pub window_width: u32,
    /// Window (screen) height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Map size as a multiple of the window size.
    pub map_scale: f32,
    /// Horizontal stretch threshold as a fraction of the window width.
    pub threshold_x: f32,
    /// Vertical stretch threshold as a fraction of the window height.
    pub threshold_y: f32,
    /// Divider line width in pixels.
    pub line_width: f32,
    /// Divider line color as `0xRRGGBB`.
    pub line_color: u32,
    /// Player movement speed in map units per second.
    pub player_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            map_scale: DEFAULT_MAP_SCALE,
            threshold_x: DEFAULT_THRESHOLD_X,
            threshold_y: DEFAULT_THRESHOLD_Y,
            line_width: DEFAULT_LINE_WIDTH,
            line_color: DEFAULT_LINE_COLOR,
            player_speed: DEFAULT_PLAYER_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or a value is malformed.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| ConfigError::Io(format!("failed to load {:?}: {}", self.config_path, e)))?;
        self.apply_ini(&config)?;

        info!(
            "Loaded config: {}x{} window, fps={}, map scale={}, threshold=({}, {})",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.map_scale,
            self.threshold_x,
            self.threshold_y
        );

        Ok(())
    }

    /// Parse configuration from INI text. Used by tests and embedded presets.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.read(text.to_string()).map_err(ConfigError::Io)?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), ConfigError> {
        let uint = |section: &str, key: &'static str| -> Result<Option<u32>, ConfigError> {
            let Some(v) = config.getuint(section, key).map_err(ConfigError::Io)? else {
                return Ok(None);
            };
            u32::try_from(v).map(Some).map_err(|_| ConfigError::InvalidSize {
                what: key,
                width: v as f32,
                height: 0.0,
            })
        };
        let float = |section: &str, key: &str| -> Result<Option<f32>, ConfigError> {
            config
                .getfloat(section, key)
                .map(|v| v.map(|v| v as f32))
                .map_err(ConfigError::Io)
        };

        // [window] section
        if let Some(width) = uint("window", "width")? {
            self.window_width = width;
        }
        if let Some(height) = uint("window", "height")? {
            self.window_height = height;
        }
        if let Some(fps) = uint("window", "target_fps")? {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").map_err(ConfigError::Io)? {
            self.vsync = vsync;
        }

        // [map] section
        if let Some(scale) = float("map", "scale")? {
            self.map_scale = scale;
        }

        // [split] section
        if let Some(x) = float("split", "threshold_x")? {
            self.threshold_x = x;
        }
        if let Some(y) = float("split", "threshold_y")? {
            self.threshold_y = y;
        }

        // [divider] section
        if let Some(width) = float("divider", "line_width")? {
            self.line_width = width;
        }
        if let Some(color) = config.get("divider", "color") {
            self.line_color = parse_color(&color)?;
        }

        // [players] section
        if let Some(speed) = float("players", "speed")? {
            self.player_speed = speed;
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("map", "scale", Some(self.map_scale.to_string()));
        config.set("split", "threshold_x", Some(self.threshold_x.to_string()));
        config.set("split", "threshold_y", Some(self.threshold_y.to_string()));
        config.set("divider", "line_width", Some(self.line_width.to_string()));
        config.set("divider", "color", Some(format!("{:06X}", self.line_color)));
        config.set("players", "speed", Some(self.player_speed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| ConfigError::Io(format!("failed to save {:?}: {}", self.config_path, e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.window_width as f32, self.window_height as f32)
    }

    /// Check every value the session depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport().map(|_| ())
    }

    /// Build the immutable viewport constants for the session.
    pub fn viewport(&self) -> Result<ViewportState, ConfigError> {
        if !(self.map_scale >= 1.0) {
            return Err(ConfigError::InvalidMapScale(self.map_scale));
        }
        let screen = self.screen_size();
        ViewportState::new(
            screen,
            screen * self.map_scale,
            Vec2::new(screen.x * self.threshold_x, screen.y * self.threshold_y),
        )?
        .with_line(self.line_width, self.line_color)
    }

    /// Initial map positions: just left and right of the middle of the
    /// window-sized top-left area of the map.
    pub fn player_starts(&self) -> [Vec2; 2] {
        let screen = self.screen_size();
        [
            Vec2::new(screen.x * 0.45, screen.y * 0.5),
            Vec2::new(screen.x * 0.55, screen.y * 0.5),
        ]
    }
}

/// Parse `RRGGBB`, `#RRGGBB` or `0xRRGGBB` into `0xRRGGBB`.
pub fn parse_color(text: &str) -> Result<u32, ConfigError> {
    let trimmed = text.trim();
    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if hex.len() != 6 {
        return Err(ConfigError::InvalidColor(text.to_string()));
    }
    u32::from_str_radix(hex, 16).map_err(|_| ConfigError::InvalidColor(text.to_string()))
}
