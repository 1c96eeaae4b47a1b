//! Opponent paddle controller
//!
//! Chases the ball's current height at a fixed step. No prediction and no
//! randomness, so a given ball trajectory always produces the same paddle path.

use crate::config::FieldConfig;
use crate::consts::OPPONENT_STEP;

/// Next opponent paddle top edge for a ball at `ball_y`
pub fn track_ball(paddle_y: f32, ball_y: f32, field: &FieldConfig) -> f32 {
    let center = paddle_y + field.paddle_height / 2.0;
    let next = if center < ball_y {
        paddle_y + OPPONENT_STEP
    } else {
        paddle_y - OPPONENT_STEP
    };
    field.clamp_paddle_y(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_toward_ball() {
        let field = FieldConfig::default();
        // Centre at 200, ball below
        assert_eq!(track_ball(160.0, 300.0, &field), 162.0);
        // Ball above
        assert_eq!(track_ball(160.0, 50.0, &field), 158.0);
        // Level counts as "not above": step up
        assert_eq!(track_ball(160.0, 200.0, &field), 158.0);
    }

    #[test]
    fn test_clamped_at_edges() {
        let field = FieldConfig::default();
        assert_eq!(track_ball(0.0, 0.0, &field), 0.0);
        assert_eq!(track_ball(1.0, 0.0, &field), 0.0);
        assert_eq!(track_ball(320.0, 399.0, &field), 320.0);
    }

    #[test]
    fn test_converges_and_holds_near_ball() {
        let field = FieldConfig::default();
        let mut y = 0.0;
        for _ in 0..500 {
            y = track_ball(y, 250.0, &field);
        }
        let center = y + field.paddle_height / 2.0;
        assert!((center - 250.0).abs() <= OPPONENT_STEP);
    }
}
