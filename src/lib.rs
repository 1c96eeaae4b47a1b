//! Canvas Pong - a two-paddle ball game simulation
//!
//! Core modules:
//! - `sim`: Per-tick simulation (ball motion, collisions, scoring, opponent)
//! - `round`: Round lifecycle state machine (idle, countdown, running)
//! - `session`: Frame driver owning state, round and controls
//! - `input`: Pointer/key translation into paddle target and start signal
//! - `renderer`: Read-only tessellation of a frame snapshot
//! - `config`: Field geometry and session settings

pub mod autopilot;
pub mod config;
pub mod error;
pub mod input;
pub mod renderer;
pub mod round;
pub mod session;
pub mod sim;

pub use config::{FieldConfig, GameConfig};
pub use error::ConfigError;
pub use input::{InputAdapter, InputEvent, PlayerControls};
pub use round::{RoundController, RoundPhase};
pub use session::{FrameReport, RenderSnapshot, Session};

/// Reference game constants
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle size
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;

    /// Ball bounding square side
    pub const BALL_SIZE: f32 = 12.0;
    /// Ball travel per tick along each axis
    pub const BALL_SPEED: f32 = 7.0;

    /// Opponent paddle travel per tick
    pub const OPPONENT_STEP: f32 = 2.0;

    /// Countdown length before a round starts (seconds)
    pub const COUNTDOWN_SECS: u8 = 3;

    /// Key code that requests a new round
    pub const START_KEY: &str = "Space";
}

/// Clamp a paddle top edge into `[0, field_height - paddle_height]`
#[inline]
pub fn clamp_paddle_y(y: f32, field_height: f32, paddle_height: f32) -> f32 {
    y.clamp(0.0, (field_height - paddle_height).max(0.0))
}
