//! Collision tests for the rectangular field
//!
//! All tests are plain interpenetration checks on the ball's position after
//! this tick's motion. There is no swept test, so a ball faster than a paddle
//! is thick can pass straight through it.

use super::state::{Ball, Paddle, Side};
use crate::config::FieldConfig;

/// Horizontal wall the ball is pushing into, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Wall the ball has reached while still moving into it
pub fn wall_contact(ball: &Ball, field: &FieldConfig) -> Option<Wall> {
    if ball.pos.y <= 0.0 && ball.vel.y < 0.0 {
        Some(Wall::Top)
    } else if ball.pos.y >= field.height - field.ball_size && ball.vel.y > 0.0 {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Whether the ball's vertical extent overlaps the paddle's (edges inclusive)
pub fn overlaps_vertically(ball: &Ball, paddle: &Paddle, field: &FieldConfig) -> bool {
    ball.bottom(field.ball_size) >= paddle.y && ball.pos.y <= paddle.y + field.paddle_height
}

/// Whether the ball is inside `side`'s paddle and still travelling toward
/// that side's wall
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side, field: &FieldConfig) -> bool {
    let in_reach = match side {
        Side::Player => ball.pos.x <= field.paddle_width && ball.vel.x < 0.0,
        Side::Opponent => {
            ball.pos.x >= field.width - field.paddle_width - field.ball_size && ball.vel.x > 0.0
        }
    };
    in_reach && overlaps_vertically(ball, paddle, field)
}

/// Side credited with a goal if the ball has left the field outward
pub fn goal_scorer(ball: &Ball, field: &FieldConfig) -> Option<Side> {
    if ball.pos.x < 0.0 && ball.vel.x < 0.0 {
        Some(Side::Opponent)
    } else if ball.pos.x > field.width - field.ball_size && ball.vel.x > 0.0 {
        Some(Side::Player)
    } else {
        None
    }
}

/// X the ball is pinned to after bouncing off the opponent paddle
pub fn opponent_rebound_x(field: &FieldConfig) -> f32 {
    field.width - field.paddle_width - field.ball_size - 1.0
}
