//! World state and initial population
//!
//! The world owns every entity. It is built once at startup and the
//! population never changes afterwards: no respawns, splits or deaths.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::motion::{Body, WorldBounds};
use super::photon::PhotonPool;
use super::shape::{Shape, jittered_radii};
use super::trig::trig;
use crate::error::AsteroidsError;
use crate::settings::{AsteroidSettings, Settings};

/// Snapshot of the whole simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub bounds: WorldBounds,
    pub ship: Body,
    pub asteroids: Vec<Body>,
    pub photons: PhotonPool,
    /// Seconds until the next shot is allowed
    pub fire_cooldown: f32,
    /// Seconds until the next automatic shot
    pub auto_fire_timer: f32,
    /// Simulation steps taken so far
    pub steps: u64,
}

impl World {
    /// Spawn the ship at the center and a seeded asteroid field
    pub fn new(settings: &Settings) -> Result<Self, AsteroidsError> {
        settings.validate()?;
        let bounds = settings.bounds();
        let mut rng = Pcg32::seed_from_u64(settings.seed);

        let ship_shape = Shape::build(&settings.ship.radii(), 4, trig())?;
        let ship = Body::new(ship_shape, bounds.center());

        let asteroids = (0..settings.asteroids.count)
            .map(|_| spawn_asteroid(&mut rng, &settings.asteroids, &bounds))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "World {}x{} seeded with {}: {} asteroids, {} photon slots",
            bounds.width,
            bounds.height,
            settings.seed,
            asteroids.len(),
            settings.photons.count
        );

        Ok(Self {
            bounds,
            ship,
            asteroids,
            photons: PhotonPool::new(settings.photons.count),
            fire_cooldown: 0.0,
            auto_fire_timer: 0.0,
            steps: 0,
        })
    }
}

fn random_sign<R: Rng>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// One asteroid with a random outline, position, drift and heading
pub fn spawn_asteroid<R: Rng>(
    rng: &mut R,
    cfg: &AsteroidSettings,
    bounds: &WorldBounds,
) -> Result<Body, AsteroidsError> {
    let sides = rng.random_range(cfg.min_sides..=cfg.max_sides);
    let radii = jittered_radii(rng, cfg.base_radius, cfg.jitter, sides);
    let shape = Shape::build(&radii, sides, trig())?;

    let pos = Vec2::new(
        rng.random::<f32>() * bounds.width,
        rng.random::<f32>() * bounds.height,
    );
    let mut body = Body::new(shape, pos);
    // random::<f32>() * extent can round up to the extent itself
    bounds.wrap(&mut body.pos);

    body.vel = Vec2::new(
        random_sign(rng) * rng.random::<f32>() * cfg.max_speed,
        random_sign(rng) * rng.random::<f32>() * cfg.max_speed,
    );
    body.angle = rng.random_range(0..360) as f32;
    Ok(body)
}
