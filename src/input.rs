//! Input translation
//!
//! Turns raw pointer positions and key codes into the two things the
//! simulation consumes: a clamped paddle target and a start edge.

use crate::config::{FieldConfig, GameConfig};

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    StartRequested,
}

/// Narrow write channel from the host into the session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerControls {
    /// Latest paddle target (top edge), last write wins
    pub target_y: Option<f32>,
    /// One-shot start edge, cleared when a frame consumes it
    pub start_requested: bool,
}

impl PlayerControls {
    /// Take the start edge, clearing it
    pub fn take_start(&mut self) -> bool {
        std::mem::take(&mut self.start_requested)
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::StartRequested => self.start_requested = true,
        }
    }
}

/// Maps host input into field coordinates and events
#[derive(Debug, Clone)]
pub struct InputAdapter {
    field: FieldConfig,
    start_keys: Vec<String>,
}

impl InputAdapter {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            field: FieldConfig::default(),
            start_keys: config.start_keys.clone(),
        }
    }

    /// Paddle target for a pointer at `client_y`, with the canvas top edge at
    /// `canvas_top` in the same coordinate space
    pub fn pointer_moved(&self, client_y: f32, canvas_top: f32) -> f32 {
        self.field.clamp_paddle_y(client_y - canvas_top)
    }

    pub fn key_pressed(&self, code: &str) -> Option<InputEvent> {
        self.start_keys
            .iter()
            .any(|k| k == code)
            .then_some(InputEvent::StartRequested)
    }
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
