//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let Vec2 { x: x0, y: y0 } = top_left;
    let Vec2 { x: x1, y: y1 } = top_left + size;

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Lit segments per digit, bits `a..g` low to high
const SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Generate vertices for a single seven-segment digit
///
/// ```text
///  aaa
/// f   b
///  ggg
/// e   c
///  ddd
/// ```
pub fn digit(value: u8, top_left: Vec2, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mask = SEGMENTS[(value % 10) as usize];
    let w = height / 2.0;
    let t = (height / 8.0).max(1.0);
    let half = height / 2.0;
    let Vec2 { x, y } = top_left;

    let bars = [
        (Vec2::new(x, y), Vec2::new(w, t)),
        (Vec2::new(x + w - t, y), Vec2::new(t, half)),
        (Vec2::new(x + w - t, y + half), Vec2::new(t, half)),
        (Vec2::new(x, y + height - t), Vec2::new(w, t)),
        (Vec2::new(x, y + half), Vec2::new(t, half)),
        (Vec2::new(x, y), Vec2::new(t, half)),
        (Vec2::new(x, y + half - t / 2.0), Vec2::new(w, t)),
    ];

    bars.iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1u8 << *bit) != 0)
        .flat_map(|(_, &(pos, size))| rect(pos, size, color))
        .collect()
}

/// Generate vertices for a decimal number centred on `center`
pub fn number(value: u32, center: Vec2, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let digits: Vec<u8> = value
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect();
    let digit_width = height / 2.0;
    let gap = height / 4.0;
    let total = digits.len() as f32 * digit_width + (digits.len() as f32 - 1.0) * gap;
    let mut x = center.x - total / 2.0;
    let y = center.y - height / 2.0;

    let mut vertices = Vec::new();
    for d in digits {
        vertices.extend(digit(d, Vec2::new(x, y), height, color));
        x += digit_width + gap;
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec2::from(v.position);
                (lo.min(p), hi.max(p))
            },
        )
    }

    #[test]
    fn test_rect_covers_its_area() {
        let v = rect(Vec2::new(0.0, 160.0), Vec2::new(10.0, 80.0), colors::PADDLE);
        assert_eq!(v.len(), 6);
        assert_eq!(bounds(&v), (Vec2::new(0.0, 160.0), Vec2::new(10.0, 240.0)));
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(406.0, 206.0);
        let v = circle(center, 6.0, colors::BALL, 16);
        assert_eq!(v.len(), 48);
        for vertex in &v {
            assert!(Vec2::from(vertex.position).distance(center) <= 6.0 + 1e-4);
        }
    }

    #[test]
    fn test_digit_segment_counts() {
        // Six vertices per lit segment
        assert_eq!(digit(1, Vec2::ZERO, 48.0, colors::COUNTDOWN).len(), 2 * 6);
        assert_eq!(digit(3, Vec2::ZERO, 48.0, colors::COUNTDOWN).len(), 5 * 6);
        assert_eq!(digit(8, Vec2::ZERO, 48.0, colors::COUNTDOWN).len(), 7 * 6);
    }

    #[test]
    fn test_number_is_centred() {
        let center = Vec2::new(400.0, 200.0);
        let (lo, hi) = bounds(&number(20, center, 48.0, colors::COUNTDOWN));
        assert!(((lo.x + hi.x) / 2.0 - center.x).abs() < 1e-3);
        assert!(((lo.y + hi.y) / 2.0 - center.y).abs() < 1e-3);
    }
}
