//! Game tuning
//!
//! Every gameplay constant lives here so different builds of the field
//! (rotation speed, thrust, fire rate) are data, not code. Defaults match
//! the constants in [`crate::consts`]. A JSON file named by
//! `ROCK_DRIFT_SETTINGS` may override any subset of them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::AsteroidsError;
use crate::sim::motion::WorldBounds;

/// Environment variable naming an optional settings file
pub const SETTINGS_ENV: &str = "ROCK_DRIFT_SETTINGS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipSettings {
    pub base_radius: f32,
    /// Degrees per second
    pub rotation_speed: f32,
    /// Pixels per second²
    pub thrust: f32,
    /// Per-axis velocity limit, pixels per second
    pub max_speed: f32,
}

impl Default for ShipSettings {
    fn default() -> Self {
        Self {
            base_radius: SHIP_BASE_RADIUS,
            rotation_speed: SHIP_ROTATION_SPEED,
            thrust: SHIP_THRUST,
            max_speed: SHIP_MAX_SPEED,
        }
    }
}

impl ShipSettings {
    /// Per-vertex radii of the ship silhouette
    pub fn radii(&self) -> [f32; 4] {
        SHIP_RADII_RATIOS.map(|ratio| ratio * self.base_radius)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidSettings {
    pub count: usize,
    pub min_sides: usize,
    pub max_sides: usize,
    pub base_radius: f32,
    /// Radius jitter as a fraction of `base_radius`
    pub jitter: f32,
    pub max_speed: f32,
    /// Free spin, degrees per second
    pub rotation_speed: f32,
}

impl Default for AsteroidSettings {
    fn default() -> Self {
        Self {
            count: ASTEROID_COUNT,
            min_sides: ASTEROID_SIDE_COUNT_MIN,
            max_sides: ASTEROID_SIDE_COUNT_MAX,
            base_radius: ASTEROID_BASE_RADIUS,
            jitter: ASTEROID_JITTER,
            max_speed: ASTEROID_MAX_SPEED,
            rotation_speed: ASTEROID_ROTATION_SPEED,
        }
    }
}

impl AsteroidSettings {
    /// Largest distance a jittered vertex can sit from the center
    pub fn outer_radius(&self) -> f32 {
        self.base_radius * (1.0 + self.jitter)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotonSettings {
    pub count: usize,
    pub speed: f32,
    pub radius: f32,
    /// Seconds between shots
    pub cooldown: f32,
    /// Fire on a timer, without the fire key
    pub auto_fire: bool,
    /// Seconds between automatic shots
    pub auto_fire_interval: f32,
}

impl Default for PhotonSettings {
    fn default() -> Self {
        Self {
            count: PHOTON_COUNT,
            speed: PHOTON_SPEED,
            radius: PHOTON_RADIUS,
            cooldown: PHOTON_COOLDOWN,
            auto_fire: false,
            auto_fire_interval: PHOTON_AUTO_FIRE_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    /// FPS, heading, velocity, position and photon count overlay
    pub telemetry: bool,
    /// Outline circles around ship and asteroids
    pub bounds: bool,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            telemetry: true,
            bounds: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Hold window used to synthesize key releases on terminals that do
    /// not report them, in milliseconds
    pub release_hold_ms: u64,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            release_hold_ms: KEY_RELEASE_FALLBACK_MS,
        }
    }
}

/// All tuning for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for the asteroid field
    pub seed: u64,
    /// Minimum milliseconds between simulation steps
    pub step_ms: u64,
    pub world: WorldSettings,
    pub ship: ShipSettings,
    pub asteroids: AsteroidSettings,
    pub photons: PhotonSettings,
    pub input: InputSettings,
    pub debug: DebugSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            step_ms: UPDATE_STEP_MS,
            world: WorldSettings::default(),
            ship: ShipSettings::default(),
            asteroids: AsteroidSettings::default(),
            photons: PhotonSettings::default(),
            input: InputSettings::default(),
            debug: DebugSettings::default(),
        }
    }
}

impl Settings {
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world.width, self.world.height)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and validate a settings file
    pub fn from_path(path: &Path) -> Result<Self, AsteroidsError> {
        let json = std::fs::read_to_string(path).map_err(|source| AsteroidsError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| AsteroidsError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Resolve settings from the environment, falling back to defaults
    pub fn load() -> Result<Self, AsteroidsError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                log::debug!("Loading settings from {}", path.display());
                Self::from_path(&path)
            }
            None => {
                log::debug!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), AsteroidsError> {
        let invalid = |msg: String| Err(AsteroidsError::InvalidSettings(msg));

        let finite_positive = |v: f32| v.is_finite() && v > 0.0;
        if !(finite_positive(self.world.width) && finite_positive(self.world.height)) {
            return invalid(format!(
                "world size must be finite and positive, got {}x{}",
                self.world.width, self.world.height
            ));
        }
        if self.step_ms == 0 {
            return invalid("step_ms must be at least 1".into());
        }
        if self.input.release_hold_ms == 0 {
            return invalid("input.release_hold_ms must be at least 1".into());
        }
        let a = &self.asteroids;
        if a.min_sides < 3 {
            return invalid(format!("asteroids.min_sides must be >= 3, got {}", a.min_sides));
        }
        if a.min_sides > a.max_sides {
            return invalid(format!(
                "asteroids.min_sides ({}) exceeds max_sides ({})",
                a.min_sides, a.max_sides
            ));
        }
        if !(0.0..1.0).contains(&a.jitter) {
            return invalid(format!("asteroids.jitter must be in [0, 1), got {}", a.jitter));
        }
        let radii = [
            ("ship.base_radius", self.ship.base_radius),
            ("asteroids.base_radius", a.base_radius),
            ("photons.radius", self.photons.radius),
        ];
        for (name, value) in radii {
            if !finite_positive(value) {
                return invalid(format!("{name} must be finite and positive, got {value}"));
            }
        }
        let non_negative = [
            ("ship.rotation_speed", self.ship.rotation_speed),
            ("ship.thrust", self.ship.thrust),
            ("ship.max_speed", self.ship.max_speed),
            ("asteroids.max_speed", a.max_speed),
            ("photons.speed", self.photons.speed),
            ("photons.cooldown", self.photons.cooldown),
            ("photons.auto_fire_interval", self.photons.auto_fire_interval),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return invalid(format!("{name} must be non-negative, got {value}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let s = Settings::default();
        assert_eq!(s.step_ms, 16);
        assert_eq!(s.bounds(), WorldBounds::new(800.0, 600.0));
        assert_eq!(s.ship.radii(), [20.0, 10.0, -5.0, 10.0]);
        assert!((s.asteroids.outer_radius() - 36.0).abs() < 1e-4);
        assert_eq!(s.photons.count, 16);
        assert_eq!(s.photons.auto_fire_interval, 1.0);
        assert_eq!(s.input.release_hold_ms, 700);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(
            r#"{ "seed": 42, "ship": { "rotation_speed": 180 }, "photons": { "auto_fire": true } }"#,
        )
        .unwrap();
        assert_eq!(s.seed, 42);
        assert_eq!(s.ship.rotation_speed, 180.0);
        assert_eq!(s.ship.max_speed, SHIP_MAX_SPEED);
        assert!(s.photons.auto_fire);
        assert_eq!(s.asteroids, AsteroidSettings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings::default();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_validate_rejects_bad_sides() {
        let mut s = Settings::default();
        s.asteroids.min_sides = 2;
        assert!(matches!(s.validate(), Err(AsteroidsError::InvalidSettings(_))));

        let mut s = Settings::default();
        s.asteroids.min_sides = 9;
        s.asteroids.max_sides = 8;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let mut s = Settings::default();
        s.world.width = 0.0;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.photons.cooldown = -1.0;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.step_ms = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        let mut s = Settings::default();
        s.ship.base_radius = f32::NAN;
        assert!(matches!(s.validate(), Err(AsteroidsError::InvalidSettings(_))));

        let mut s = Settings::default();
        s.asteroids.base_radius = 0.0;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.photons.radius = -2.0;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.ship.thrust = f32::INFINITY;
        assert!(s.validate().is_err());

        // 1e39 overflows f32 and parses as infinity
        let s = Settings::from_json(r#"{ "world": { "width": 1e39 } }"#).unwrap();
        assert!(s.world.width.is_infinite());
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::from_path(Path::new("/nonexistent/rock-drift.json")).unwrap_err();
        assert!(matches!(err, AsteroidsError::SettingsIo { .. }));
    }
}
