//! Rigid-body style motion shared by the ship and asteroids
//!
//! Per step the order is: turn, thrust (with a per-axis speed clamp),
//! integrate position, wrap at the world edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::Shape;
use super::trig::TrigTable;
use crate::normalize_degrees;

/// World rectangle `[0, width) × [0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x < self.width && pos.y >= 0.0 && pos.y < self.height
    }

    /// Snap an escaped coordinate to the opposite edge.
    ///
    /// `x >= width` becomes `0`, `x < 0` becomes `width`; each axis is handled
    /// on its own. This is an edge snap, not a modulo.
    pub fn wrap(&self, pos: &mut Vec2) {
        pos.x = wrap_axis(pos.x, self.width);
        pos.y = wrap_axis(pos.y, self.height);
    }
}

#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v >= extent {
        0.0
    } else if v < 0.0 {
        extent
    } else {
        v
    }
}

/// A moving, rotating outline (ship or asteroid)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees, kept in [0, 360)
    pub angle: f32,
    pub shape: Shape,
}

impl Body {
    pub fn new(shape: Shape, pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            shape,
        }
    }

    /// Rotate by `delta` degrees (positive is counter-clockwise on screen)
    pub fn turn(&mut self, delta: f32) {
        self.angle = normalize_degrees(self.angle + delta);
    }

    /// Push along the current heading, then clamp each velocity axis to
    /// `[-max_speed, max_speed]`.
    ///
    /// The clamp is per component, so diagonal speed can exceed `max_speed`.
    pub fn accelerate(&mut self, thrust: f32, max_speed: f32, dt: f32, trig: &TrigTable) {
        let (cos, sin) = trig.cos_sin(self.angle);
        let accel = Vec2::new(cos * thrust, -sin * thrust);
        self.vel += accel * dt;
        self.vel = self.vel.clamp(Vec2::splat(-max_speed), Vec2::splat(max_speed));
    }

    /// Move by velocity and wrap around the world edges
    pub fn integrate(&mut self, dt: f32, bounds: &WorldBounds) {
        self.pos += self.vel * dt;
        bounds.wrap(&mut self.pos);
    }
}
