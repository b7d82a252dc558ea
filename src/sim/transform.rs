//! Local-to-world transform for shapes

use glam::Vec2;

use super::shape::Shape;
use super::trig::TrigTable;

/// Rotate `shape` by `angle` degrees and move it to `center`, writing the
/// world-space outline into `out` (cleared first).
///
/// The rotation is counter-clockwise on screen (y grows downward). The
/// closing point is copied from the first output point so the loop stays
/// exactly closed.
pub fn transform_into(
    out: &mut Vec<Vec2>,
    shape: &Shape,
    center: Vec2,
    angle: f32,
    trig: &TrigTable,
) {
    let (cos, sin) = trig.cos_sin(angle);
    let points = shape.points();

    out.clear();
    out.reserve(points.len());
    for p in &points[..points.len() - 1] {
        let rotated = Vec2::new(p.x * cos + p.y * sin, p.y * cos - p.x * sin);
        out.push(rotated + center);
    }
    out.push(out[0]);
}

/// Allocating form of [`transform_into`]
pub fn transform(shape: &Shape, center: Vec2, angle: f32, trig: &TrigTable) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(shape.vertex_count());
    transform_into(&mut out, shape, center, angle, trig);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::trig::trig;

    fn ship() -> Shape {
        Shape::build(&[20.0, 10.0, -5.0, 10.0], 4, trig()).unwrap()
    }

    #[test]
    fn test_zero_angle_is_translation() {
        let shape = ship();
        let world = transform(&shape, Vec2::new(400.0, 300.0), 0.0, trig());
        for (local, w) in shape.points().iter().zip(&world) {
            assert_eq!(*w, *local + Vec2::new(400.0, 300.0));
        }
    }

    #[test]
    fn test_quarter_turn_points_nose_up() {
        let world = transform(&ship(), Vec2::ZERO, 90.0, trig());
        // Nose at (20, 0) rotates to screen-up (0, -20)
        assert!(world[0].x.abs() < 1e-4);
        assert!((world[0].y + 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_output_keeps_closing_point() {
        let shape = Shape::regular(30.0, 11, trig()).unwrap();
        for angle in [0.0, 17.0, 123.5, 359.9] {
            let world = transform(&shape, Vec2::new(12.5, 80.0), angle, trig());
            assert_eq!(world.len(), shape.vertex_count());
            assert_eq!(world[world.len() - 1], world[0]);
        }
    }

    #[test]
    fn test_scratch_buffer_is_reused() {
        let shape = Shape::regular(5.0, 6, trig()).unwrap();
        let mut scratch = vec![Vec2::ONE; 50];
        transform_into(&mut scratch, &shape, Vec2::ZERO, 0.0, trig());
        assert_eq!(scratch.len(), 7);
        // Stored shape is untouched
        assert_eq!(shape.points()[0], Vec2::new(5.0, 0.0));
    }
}
