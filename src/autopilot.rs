//! Demo input source
//!
//! Stands in for a human at the pointer: follows the ball with some lag and
//! jitter and presses start whenever the round is idle. Seeded, so a demo run
//! is reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::round::RoundPhase;
use crate::session::Session;

/// Largest pointer jitter either way, in field units
const JITTER: f32 = 24.0;
/// Fraction of the remaining distance the pointer covers per frame
const FOLLOW: f32 = 0.2;

pub struct Autopilot {
    rng: Pcg32,
    pointer_y: f32,
    start_key: String,
}

impl Autopilot {
    pub fn new(seed: u64, start_key: impl Into<String>) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            pointer_y: 0.0,
            start_key: start_key.into(),
        }
    }

    /// Feed this frame's pointer and key input into the session
    pub fn drive(&mut self, session: &mut Session) {
        let state = session.state();
        let field = state.field;
        let aim = state.ball.pos.y + field.ball_size / 2.0 - field.paddle_height / 2.0;
        let jitter = self.rng.random_range(-JITTER..=JITTER);
        self.pointer_y += (aim + jitter - self.pointer_y) * FOLLOW;
        session.pointer_moved(self.pointer_y, 0.0);

        if session.round().phase() == RoundPhase::Idle {
            session.key_pressed(&self.start_key);
        }
    }
}
