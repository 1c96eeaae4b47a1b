//! Game state and core simulation types
//!
//! Everything the engine mutates per tick lives here. Renderers only ever see
//! a snapshot of it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Pointer-controlled paddle on the left wall
    Player,
    /// Reactive paddle on the right wall
    Opponent,
}

/// Something the engine detected during a tick, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball reflected off a paddle
    PaddleHit { side: Side },
    /// Ball crossed a goal line; the scorer's counter was incremented
    Goal { scorer: Side },
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    /// Travel per tick
    pub vel: Vec2,
}

impl Ball {
    /// Ball at the field centre with the round-start velocity
    pub fn spawn(field: &FieldConfig) -> Self {
        Self {
            pos: field.ball_spawn(),
            vel: field.ball_start_velocity(),
        }
    }

    pub fn reset(&mut self, field: &FieldConfig) {
        *self = Self::spawn(field);
    }

    /// Bottom edge of the bounding square
    pub fn bottom(&self, size: f32) -> f32 {
        self.pos.y + size
    }
}

/// A paddle, identified by its top edge; x is implied by its side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub y: f32,
}

impl Paddle {
    pub fn centered(field: &FieldConfig) -> Self {
        Self {
            y: field.centered_paddle_y(),
        }
    }

    /// Vertical centre line
    pub fn center_y(&self, field: &FieldConfig) -> f32 {
        self.y + field.paddle_height / 2.0
    }

    /// Move to `y`, clamped into the legal range
    pub fn set_y(&mut self, y: f32, field: &FieldConfig) {
        self.y = field.clamp_paddle_y(y);
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(skip)]
    pub field: FieldConfig,
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
    pub player_score: u32,
    pub opponent_score: u32,
    /// Engine ticks applied so far
    pub ticks: u64,
}

impl GameState {
    /// Fresh state: ball centred, paddles centred, scores zero
    pub fn new(field: FieldConfig) -> Self {
        Self {
            field,
            ball: Ball::spawn(&field),
            player: Paddle::centered(&field),
            opponent: Paddle::centered(&field),
            player_score: 0,
            opponent_score: 0,
            ticks: 0,
        }
    }

    /// Apply the player's latest pointer target. Not gated by the round.
    pub fn set_player_target(&mut self, target_y: f32) {
        if target_y.is_finite() {
            self.player.set_y(target_y, &self.field);
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Opponent => self.opponent_score,
        }
    }

    /// Credit a goal and put the ball back at the centre
    pub fn award_goal(&mut self, scorer: Side) {
        match scorer {
            Side::Player => self.player_score += 1,
            Side::Opponent => self.opponent_score += 1,
        }
        self.ball.reset(&self.field);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}
