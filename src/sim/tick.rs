//! Fixed-step gating and the per-step update
//!
//! The clock runs at most one step per external tick, once at least
//! `step_ms` has passed since the previous step. Time below the threshold is
//! not accumulated or carried over; a slow host simply steps with a larger
//! `dt` instead of catching up.

use super::input::InputState;
use super::state::World;
use super::trig::trig;
use crate::consts::FPS_SAMPLE_MS;
use crate::settings::Settings;

/// What one external tick produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTick {
    /// Step length in seconds, when a step is due
    pub step: Option<f32>,
    /// A new FPS value was sampled this tick
    pub fps_sampled: bool,
}

/// Step gate plus once-per-second frame counter
#[derive(Debug, Clone)]
pub struct FrameClock {
    step_ms: u64,
    last_update_ms: u64,
    last_sample_ms: u64,
    frames: u32,
    fps: u32,
}

impl FrameClock {
    pub fn new(now_ms: u64, step_ms: u64) -> Self {
        Self {
            step_ms,
            last_update_ms: now_ms,
            last_sample_ms: now_ms,
            frames: 0,
            fps: 0,
        }
    }

    /// Frames stepped during the last full sample window
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Steps counted since the current sample window opened
    pub fn frames_in_window(&self) -> u32 {
        self.frames
    }

    /// Milliseconds until the next step is due (0 if overdue)
    pub fn until_next_step(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.last_update_ms);
        self.step_ms.saturating_sub(elapsed)
    }

    pub fn advance(&mut self, now_ms: u64) -> ClockTick {
        let elapsed = now_ms.saturating_sub(self.last_update_ms);
        let step = if elapsed >= self.step_ms {
            self.last_update_ms = now_ms;
            self.frames += 1;
            Some(elapsed as f32 / 1000.0)
        } else {
            None
        };

        let fps_sampled = now_ms.saturating_sub(self.last_sample_ms) >= FPS_SAMPLE_MS;
        if fps_sampled {
            self.fps = self.frames;
            self.frames = 0;
            self.last_sample_ms = now_ms;
        }

        ClockTick { step, fps_sampled }
    }
}

impl World {
    /// Advance every entity by `dt` seconds
    pub fn step(&mut self, input: &InputState, settings: &Settings, dt: f32) {
        let t = trig();
        let ship_cfg = &settings.ship;

        if input.turn_left {
            self.ship.turn(ship_cfg.rotation_speed * dt);
        }
        if input.turn_right {
            self.ship.turn(-ship_cfg.rotation_speed * dt);
        }
        if input.thrust {
            self.ship.accelerate(ship_cfg.thrust, ship_cfg.max_speed, dt, t);
        }
        self.ship.integrate(dt, &self.bounds);

        let spin = settings.asteroids.rotation_speed * dt;
        for asteroid in &mut self.asteroids {
            asteroid.turn(spin);
            asteroid.integrate(dt, &self.bounds);
        }

        self.photons.update(dt, &self.bounds);

        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
        self.auto_fire_timer = (self.auto_fire_timer - dt).max(0.0);
        let cfg = &settings.photons;
        let keyed = input.fire && self.fire_cooldown <= 0.0;
        let timed = cfg.auto_fire && self.auto_fire_timer <= 0.0;
        if timed {
            self.auto_fire_timer = cfg.auto_fire_interval;
        }
        if keyed || timed {
            if self.photons.fire(self.ship.pos, self.ship.angle, cfg.speed, t) {
                self.fire_cooldown = cfg.cooldown;
            } else {
                log::trace!("Photon pool exhausted, shot dropped");
            }
        }

        self.steps += 1;
    }
}
