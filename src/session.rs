//! Session driver
//!
//! Owns the simulation state, the round controller and the player's input
//! channel. The host calls [`Session::frame`] once per animation frame with
//! the wall-clock time since the previous frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::input::{InputAdapter, PlayerControls};
use crate::renderer::{self, RenderTarget};
use crate::round::{RoundController, RoundPhase};
use crate::sim::{GameEvent, GameState, TickInput, goal_in, tick};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub ball_position: Vec2,
    pub ball_visible: bool,
    pub player_y: f32,
    pub opponent_y: f32,
    pub player_score: u32,
    pub opponent_score: u32,
    pub countdown: Option<u8>,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Round phase after the frame
    pub phase: Option<RoundPhase>,
    /// Whether the engine ticked this frame
    pub ticked: bool,
    /// Engine events, in detection order
    pub events: Vec<GameEvent>,
    /// Whether a render target received the frame
    pub drew: bool,
}

/// A single play session
pub struct Session {
    state: GameState,
    round: RoundController,
    input: InputAdapter,
    controls: PlayerControls,
    target: Option<Box<dyn RenderTarget>>,
    stopped: bool,
}

impl Session {
    /// Create a session. The settings are assumed validated.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: GameState::default(),
            round: RoundController::default(),
            input: InputAdapter::new(config),
            controls: PlayerControls::default(),
            target: None,
            stopped: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn round(&self) -> &RoundController {
        &self.round
    }

    pub fn controls(&self) -> &PlayerControls {
        &self.controls
    }

    /// Pointer moved over the canvas
    pub fn pointer_moved(&mut self, client_y: f32, canvas_top: f32) {
        self.controls.target_y = Some(self.input.pointer_moved(client_y, canvas_top));
    }

    /// Key pressed; returns whether it was a start key
    pub fn key_pressed(&mut self, code: &str) -> bool {
        match self.input.key_pressed(code) {
            Some(event) => {
                self.controls.apply(event);
                true
            }
            None => false,
        }
    }

    pub fn set_render_target(&mut self, target: Box<dyn RenderTarget>) {
        self.target = Some(target);
    }

    pub fn clear_render_target(&mut self) -> Option<Box<dyn RenderTarget>> {
        self.target.take()
    }

    /// Advance one host frame, `dt` seconds after the previous one
    pub fn frame(&mut self, dt: f32) -> FrameReport {
        if self.stopped {
            return FrameReport::default();
        }

        // `dt` belongs to the interval before this frame, so a countdown
        // armed below starts counting on the next frame
        self.round.advance(dt);
        if self.controls.take_start() {
            self.round.request_start();
        }

        // Paddle control is never gated by the round
        if let Some(target) = self.controls.target_y {
            self.state.set_player_target(target);
        }

        let mut report = FrameReport::default();
        if self.round.is_running() {
            let input = TickInput {
                player_target_y: self.controls.target_y,
            };
            report.events = tick(&mut self.state, &input);
            report.ticked = true;
            if goal_in(&report.events).is_some() {
                self.round.on_goal();
            }
        }
        report.phase = Some(self.round.phase());

        let snapshot = self.snapshot();
        match self.target.as_mut() {
            Some(target) => {
                let vertices = renderer::build_frame(&snapshot, &self.state.field);
                target.present(&vertices);
                report.drew = true;
            }
            None => log::trace!("No render target; skipping draw"),
        }

        report
    }

    /// Read-only view of the current frame
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            ball_position: self.state.ball.pos,
            ball_visible: self.round.is_running(),
            player_y: self.state.player.y,
            opponent_y: self.state.opponent.y,
            player_score: self.state.player_score,
            opponent_score: self.state.opponent_score,
            countdown: self.round.countdown_value(),
        }
    }

    /// Tear the session down: cancel any countdown and ignore later frames
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.round.cancel();
        self.controls = PlayerControls::default();
        self.stopped = true;
        log::info!(
            "Session stopped at player {} - opponent {}",
            self.state.player_score,
            self.state.opponent_score
        );
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
