//! Per-frame simulation tick
//!
//! One call advances the ball by exactly one step of its velocity. There is
//! no fixed-timestep accumulator; the host calls this once per display frame.

use super::collision::{goal_scorer, opponent_rebound_x, paddle_contact, wall_contact};
use super::opponent::track_ball;
use super::state::{GameEvent, GameState, Side};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Latest player paddle target (top edge), if any input arrived
    pub player_target_y: Option<f32>,
}

/// Advance the game state by one tick.
///
/// Every check below runs every tick in this order; several may fire in the
/// same tick (a wall bounce and a paddle hit, say).
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let field = state.field;

    if let Some(target) = input.player_target_y {
        state.set_player_target(target);
    }

    state.ticks += 1;

    // 1. Motion
    state.ball.pos += state.ball.vel;

    // 2. Top/bottom walls. No positional correction; overshoot is drawn as is.
    if let Some(wall) = wall_contact(&state.ball, &field) {
        state.ball.vel.y = -state.ball.vel.y;
        log::trace!("Wall bounce ({:?}) at y={}", wall, state.ball.pos.y);
        events.push(GameEvent::WallBounce);
    }

    // 3. Opponent follows the ball
    state.opponent.y = track_ball(state.opponent.y, state.ball.pos.y, &field);

    // 4. Player paddle: reflect only
    if paddle_contact(&state.ball, &state.player, Side::Player, &field) {
        state.ball.vel.x = -state.ball.vel.x;
        events.push(GameEvent::PaddleHit { side: Side::Player });
    }

    // 5. Opponent paddle: reflect and pin the ball in front of the paddle so
    //    the two cannot interlock on later ticks
    if paddle_contact(&state.ball, &state.opponent, Side::Opponent, &field) {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.pos.x = opponent_rebound_x(&field);
        events.push(GameEvent::PaddleHit {
            side: Side::Opponent,
        });
    }

    // 6. Goals
    if let Some(scorer) = goal_scorer(&state.ball, &field) {
        state.award_goal(scorer);
        log::info!(
            "Goal for {:?}: player {} - opponent {}",
            scorer,
            state.player_score,
            state.opponent_score
        );
        events.push(GameEvent::Goal { scorer });
    }

    events
}

/// Whether a tick's events include a goal, and for whom
pub fn goal_in(events: &[GameEvent]) -> Option<Side> {
    events.iter().find_map(|e| match e {
        GameEvent::Goal { scorer } => Some(*scorer),
        _ => None,
    })
}
