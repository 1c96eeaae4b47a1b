//! Property tests for the simulation and round invariants.

use canvas_pong::round::{RoundController, RoundPhase};
use canvas_pong::sim::{Ball, GameState, Side, TickInput, goal_in, tick};
use glam::Vec2;
use proptest::prelude::*;

const SPEED: f32 = 7.0;

fn velocity() -> impl Strategy<Value = Vec2> {
    (any::<bool>(), any::<bool>()).prop_map(|(right, down)| {
        Vec2::new(
            if right { SPEED } else { -SPEED },
            if down { SPEED } else { -SPEED },
        )
    })
}

fn allowed(from: RoundPhase, to: RoundPhase) -> bool {
    matches!(
        (from, to),
        (RoundPhase::Idle, RoundPhase::Countdown(3))
            | (RoundPhase::Countdown(3), RoundPhase::Countdown(2))
            | (RoundPhase::Countdown(2), RoundPhase::Countdown(1))
            | (RoundPhase::Countdown(1), RoundPhase::Running)
            | (RoundPhase::Running, RoundPhase::Idle)
    )
}

proptest! {
    #[test]
    fn paddles_stay_in_range_and_speed_is_constant(
        x in 20.0f32..780.0,
        y in 0.0f32..388.0,
        vel in velocity(),
        opponent_y in 0.0f32..=320.0,
        targets in prop::collection::vec(-1_000.0f32..1_000.0, 1..600),
    ) {
        let mut state = GameState::default();
        state.ball = Ball { pos: Vec2::new(x, y), vel };
        state.opponent.y = opponent_y;

        for target in targets {
            let input = TickInput { player_target_y: Some(target) };
            tick(&mut state, &input);

            prop_assert!((0.0..=320.0).contains(&state.player.y));
            prop_assert!((0.0..=320.0).contains(&state.opponent.y));
            prop_assert_eq!(state.ball.vel.x.abs(), SPEED);
            prop_assert_eq!(state.ball.vel.y.abs(), SPEED);
            prop_assert!(state.ball.pos.x >= -SPEED && state.ball.pos.x <= 800.0);
            prop_assert!(state.ball.pos.y >= -SPEED && state.ball.pos.y <= 400.0);
        }
    }

    #[test]
    fn left_goal_always_resets_ball_exactly(
        x in -20.0f32..6.9,
        y in 0.0f32..290.0,
        down in any::<bool>(),
    ) {
        let mut state = GameState::default();
        state.player.y = 320.0;
        let vy = if down { SPEED } else { -SPEED };
        state.ball = Ball { pos: Vec2::new(x, y), vel: Vec2::new(-SPEED, vy) };

        let events = tick(&mut state, &TickInput::default());

        prop_assert_eq!(goal_in(&events), Some(Side::Opponent));
        prop_assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        prop_assert_eq!(state.ball.vel, Vec2::new(SPEED, SPEED));
        prop_assert_eq!(state.opponent_score, 1);
    }

    #[test]
    fn right_goal_always_resets_ball_exactly(
        x in 781.1f32..800.0,
        y in 120.0f32..380.0,
        down in any::<bool>(),
    ) {
        let mut state = GameState::default();
        state.opponent.y = 0.0;
        let vy = if down { SPEED } else { -SPEED };
        state.ball = Ball { pos: Vec2::new(x, y), vel: Vec2::new(SPEED, vy) };

        let events = tick(&mut state, &TickInput::default());

        prop_assert_eq!(goal_in(&events), Some(Side::Player));
        prop_assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        prop_assert_eq!(state.ball.vel, Vec2::new(SPEED, SPEED));
        prop_assert_eq!(state.player_score, 1);
    }

    #[test]
    fn round_only_moves_through_full_countdown(
        steps in prop::collection::vec((0.0f32..0.999, any::<bool>(), any::<bool>()), 1..300),
    ) {
        let mut round = RoundController::default();
        let mut phase = round.phase();

        for (dt, start, goal) in steps {
            if start {
                round.request_start();
            }
            if goal {
                round.on_goal();
            }
            round.advance(dt);

            let next = round.phase();
            if next != phase {
                prop_assert!(allowed(phase, next), "{:?} -> {:?}", phase, next);
            }
            phase = next;
        }
    }

    #[test]
    fn start_outside_idle_has_no_effect(
        warmup in prop::collection::vec(0.0f32..0.999, 1..10),
        after in prop::collection::vec(0.0f32..0.999, 1..20),
    ) {
        let mut round = RoundController::default();
        round.request_start();
        for dt in warmup {
            round.advance(dt);
        }
        prop_assume!(round.phase() != RoundPhase::Idle);

        let mut pressed = round.clone();
        prop_assert!(!pressed.request_start());

        for dt in after {
            round.advance(dt);
            pressed.advance(dt);
            prop_assert_eq!(round.phase(), pressed.phase());
            prop_assert_eq!(round.countdown_value(), pressed.countdown_value());
        }
    }
}
