//! Round lifecycle state machine
//!
//! `Idle -> Countdown(n) -> ... -> Countdown(1) -> Running -> Idle`
//!
//! The countdown is paced by wall-clock seconds fed in through
//! [`RoundController::advance`], not by simulation ticks, because ticks only
//! run while `Running`.

use serde::{Deserialize, Serialize};

/// Slack for frame deltas that sum to a whole second only approximately
const SECOND_EPSILON: f64 = 1e-6;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Between rounds: ball frozen and hidden, paddles still visible
    Idle,
    /// Seconds left before play starts
    Countdown(u8),
    /// Ball in motion
    Running,
}

/// Gates the update engine and owns the countdown timer
#[derive(Debug, Clone)]
pub struct RoundController {
    phase: RoundPhase,
    countdown_secs: u8,
    /// Seconds accumulated toward the next countdown step
    elapsed: f64,
}

impl RoundController {
    pub fn new(countdown_secs: u8) -> Self {
        Self {
            phase: RoundPhase::Idle,
            countdown_secs: countdown_secs.max(1),
            elapsed: 0.0,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    /// Number to display, if counting down
    pub fn countdown_value(&self) -> Option<u8> {
        match self.phase {
            RoundPhase::Countdown(n) => Some(n),
            _ => None,
        }
    }

    /// Handle a start signal. Only accepted from `Idle`; ignored otherwise.
    pub fn request_start(&mut self) -> bool {
        match self.phase {
            RoundPhase::Idle => {
                self.phase = RoundPhase::Countdown(self.countdown_secs);
                self.elapsed = 0.0;
                log::info!("Round starting in {}s", self.countdown_secs);
                true
            }
            phase => {
                log::debug!("Start ignored during {:?}", phase);
                false
            }
        }
    }

    /// Feed wall-clock time. Returns the new phase if it changed.
    pub fn advance(&mut self, secs: f32) -> Option<RoundPhase> {
        let RoundPhase::Countdown(_) = self.phase else {
            return None;
        };
        if !(secs.is_finite() && secs > 0.0) {
            return None;
        }

        let before = self.phase;
        self.elapsed += f64::from(secs);
        while self.elapsed >= 1.0 - SECOND_EPSILON {
            let RoundPhase::Countdown(n) = self.phase else {
                break;
            };
            self.elapsed -= 1.0;
            self.phase = if n > 1 {
                log::debug!("Countdown {}", n - 1);
                RoundPhase::Countdown(n - 1)
            } else {
                log::info!("Round running");
                RoundPhase::Running
            };
        }
        if self.phase == RoundPhase::Running {
            self.elapsed = 0.0;
        }

        (self.phase != before).then_some(self.phase)
    }

    /// Goal scored: stop play until the next start signal
    pub fn on_goal(&mut self) {
        if self.phase == RoundPhase::Running {
            self.phase = RoundPhase::Idle;
        }
    }

    /// Disarm any pending countdown and return to `Idle`
    pub fn cancel(&mut self) {
        if let RoundPhase::Countdown(n) = self.phase {
            log::debug!("Countdown cancelled at {}", n);
        }
        self.phase = RoundPhase::Idle;
        self.elapsed = 0.0;
    }
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new(crate::consts::COUNTDOWN_SECS)
    }
}
