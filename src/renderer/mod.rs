//! Frame composition
//!
//! Turns a world snapshot into a backend-neutral [`DrawList`]: closed line
//! loops in world coordinates plus debug text lines. Backends only have to
//! draw line strips and text.

use glam::Vec2;

use crate::consts::PHOTON_SEGMENTS;
use crate::settings::Settings;
use crate::sim::World;
use crate::sim::motion::Body;
use crate::sim::transform::transform_into;
use crate::sim::trig::{TrigTable, trig};

pub mod shapes;

/// What a loop outlines, for backend coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Ship,
    Asteroid,
    Photon,
    Bounds,
}

/// A closed polyline; the last point repeats the first
#[derive(Debug, Clone, PartialEq)]
pub struct LineLoop {
    pub stroke: Stroke,
    pub points: Vec<Vec2>,
}

/// One telemetry line anchored at a world position
#[derive(Debug, Clone, PartialEq)]
pub struct DebugText {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Everything one frame draws, in draw order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub loops: Vec<LineLoop>,
    pub texts: Vec<DebugText>,
    /// Point buffers from previous frames, reused front to back
    spare: Vec<Vec<Vec2>>,
}

/// Values shown in the telemetry overlay that the world does not hold
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud {
    pub fps: u32,
}

/// Vertical spacing of telemetry lines, in world units
const TEXT_LINE_HEIGHT: f32 = 20.0;

impl DrawList {
    /// Empty the list, keeping point buffers for the next frame
    pub fn clear(&mut self) {
        self.spare
            .extend(self.loops.drain(..).rev().map(|line_loop| line_loop.points));
        self.texts.clear();
    }

    fn push_loop(&mut self, stroke: Stroke, fill: impl FnOnce(&mut Vec<Vec2>)) {
        let mut points = self.spare.pop().unwrap_or_default();
        points.clear();
        fill(&mut points);
        if points.is_empty() {
            self.spare.push(points);
        } else {
            self.loops.push(LineLoop { stroke, points });
        }
    }

    fn push_body(&mut self, stroke: Stroke, body: &Body, trig: &TrigTable) {
        self.push_loop(stroke, |out| {
            transform_into(out, &body.shape, body.pos, body.angle, trig)
        });
    }

    fn push_text(&mut self, text: String) {
        let y = self.texts.len() as f32 * TEXT_LINE_HEIGHT;
        self.texts.push(DebugText { x: 0.0, y, text });
    }

    /// Rebuild the list from `world`
    pub fn compose(&mut self, world: &World, settings: &Settings, hud: Hud) {
        let t = trig();
        self.clear();

        self.push_body(Stroke::Ship, &world.ship, t);
        for asteroid in &world.asteroids {
            self.push_body(Stroke::Asteroid, asteroid, t);
        }
        for photon in world.photons.iter_active() {
            self.push_loop(Stroke::Photon, |out| {
                shapes::circle_outline(out, photon.pos, settings.photons.radius, PHOTON_SEGMENTS, t)
            });
        }

        if settings.debug.bounds {
            let radius = settings.asteroids.outer_radius();
            for body in std::iter::once(&world.ship).chain(&world.asteroids) {
                self.push_loop(Stroke::Bounds, |out| {
                    shapes::circle_outline(out, body.pos, radius, PHOTON_SEGMENTS, t)
                });
            }
        }

        if settings.debug.telemetry {
            let ship = &world.ship;
            self.push_text(format!("fps: {}", hud.fps));
            self.push_text(format!("angle: {}", ship.angle as i32));
            self.push_text(format!("vx: {:.2}, vy: {:.2}", ship.vel.x, ship.vel.y));
            self.push_text(format!("x: {:.2}, y: {:.2}", ship.pos.x, ship.pos.y));
            self.push_text(format!(
                "photons: {}/{}",
                world.photons.active_count(),
                world.photons.capacity()
            ));
        }
    }
}
