//! Game configuration
//!
//! Field geometry, ball speed, opponent step and countdown length are fixed
//! reference constants (see [`crate::consts`]). The only thing a JSON
//! document may change is which keys request a new round.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Field geometry, derived from the reference constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Side of the ball's bounding square
    pub ball_size: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_size: BALL_SIZE,
        }
    }
}

impl FieldConfig {
    /// Highest legal paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    /// Clamp a paddle top edge into the legal range
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        crate::clamp_paddle_y(y, self.height, self.paddle_height)
    }

    /// Paddle top edge that centres it vertically
    pub fn centered_paddle_y(&self) -> f32 {
        self.max_paddle_y() / 2.0
    }

    /// Ball spawn point (top-left of its bounding square)
    pub fn ball_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ball velocity at the start of every round
    pub fn ball_start_velocity(&self) -> glam::Vec2 {
        glam::Vec2::splat(BALL_SPEED)
    }
}

/// Session settings loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Key codes that request a new round
    pub start_keys: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_keys: vec![START_KEY.to_string()],
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_keys.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::NoStartKeys);
        }
        Ok(())
    }
}
