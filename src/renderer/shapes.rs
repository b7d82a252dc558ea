//! Outline generation for 2D primitives

use glam::Vec2;

use crate::sim::trig::TrigTable;

/// Closed circle outline with `segments` sides plus the closing point
pub fn circle_outline(
    out: &mut Vec<Vec2>,
    center: Vec2,
    radius: f32,
    segments: usize,
    trig: &TrigTable,
) {
    let step = 360 / segments.max(1);
    out.clear();
    out.reserve(segments + 1);
    for i in 0..segments {
        let (cos, sin) = trig.cos_sin(((i * step) % 360) as f32);
        out.push(center + Vec2::new(radius * cos, radius * -sin));
    }
    if let Some(&first) = out.first() {
        out.push(first);
    }
}
