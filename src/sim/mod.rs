//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per call, no wall-clock access
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod opponent;
pub mod state;
pub mod tick;

pub use collision::{Wall, goal_scorer, paddle_contact, wall_contact};
pub use opponent::track_ball;
pub use state::{Ball, GameEvent, GameState, Paddle, Side};
pub use tick::{TickInput, goal_in, tick};
