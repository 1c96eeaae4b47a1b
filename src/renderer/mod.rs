//! Frame tessellation
//!
//! Turns a [`RenderSnapshot`] into a flat triangle list. The host owns the
//! actual drawing surface behind [`RenderTarget`]; nothing here mutates
//! simulation state.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{Vertex, colors};

use crate::config::FieldConfig;
use crate::session::RenderSnapshot;

/// Segments used to approximate the ball
const BALL_SEGMENTS: u32 = 24;

/// A drawing surface owned by the host
pub trait RenderTarget {
    /// Draw one frame's triangle list, replacing the previous frame
    fn present(&mut self, vertices: &[Vertex]);
}

/// Build the triangle list for one frame
pub fn build_frame(snapshot: &RenderSnapshot, field: &FieldConfig) -> Vec<Vertex> {
    let paddle_size = Vec2::new(field.paddle_width, field.paddle_height);
    let mut vertices = Vec::with_capacity(12 + BALL_SEGMENTS as usize * 3);

    vertices.extend(shapes::rect(
        Vec2::new(0.0, snapshot.player_y),
        paddle_size,
        colors::PADDLE,
    ));
    vertices.extend(shapes::rect(
        Vec2::new(field.width - field.paddle_width, snapshot.opponent_y),
        paddle_size,
        colors::PADDLE,
    ));

    if snapshot.ball_visible {
        let radius = field.ball_size / 2.0;
        vertices.extend(shapes::circle(
            snapshot.ball_position + Vec2::splat(radius),
            radius,
            colors::BALL,
            BALL_SEGMENTS,
        ));
    }

    if let Some(n) = snapshot.countdown.filter(|&n| n > 0) {
        let center = Vec2::new(field.width / 2.0, field.height / 2.0);
        vertices.extend(shapes::number(
            u32::from(n),
            center,
            field.height * 0.12,
            colors::COUNTDOWN,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> RenderSnapshot {
        RenderSnapshot {
            ball_position: Vec2::new(400.0, 200.0),
            ball_visible: true,
            player_y: 160.0,
            opponent_y: 100.0,
            player_score: 0,
            opponent_score: 0,
            countdown: None,
        }
    }

    #[test]
    fn test_paddles_and_ball() {
        let field = FieldConfig::default();
        let v = build_frame(&snapshot(), &field);
        assert_eq!(v.len(), 12 + BALL_SEGMENTS as usize * 3);
        // Opponent paddle sits against the right wall
        assert_eq!(v[6].position, [790.0, 100.0]);
        // Ball drawn centred in its bounding square
        assert_eq!(v[12].position, [406.0, 206.0]);
    }

    #[test]
    fn test_hidden_ball_is_not_drawn() {
        let field = FieldConfig::default();
        let snap = RenderSnapshot {
            ball_visible: false,
            ..snapshot()
        };
        assert_eq!(build_frame(&snap, &field).len(), 12);
    }

    #[test]
    fn test_countdown_digit_drawn() {
        let field = FieldConfig::default();
        let snap = RenderSnapshot {
            ball_visible: false,
            countdown: Some(3),
            ..snapshot()
        };
        // Digit 3 lights five segments
        assert_eq!(build_frame(&snap, &field).len(), 12 + 5 * 6);
    }
}
