//! Rock Drift - a wrap-around vector asteroids field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (trig table, polygons, motion, photons)
//! - `renderer`: Turns a world snapshot into line loops and debug text
//! - `platform`: Window/input/clock boundary and the terminal backend
//! - `app`: The per-tick driver tying the three together
//! - `settings`: Data-driven tuning, loaded once at startup

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use error::AsteroidsError;
pub use settings::Settings;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// World dimensions in pixels
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Minimum wall-clock gap between two simulation steps (~60 Hz)
    pub const UPDATE_STEP_MS: u64 = 16;
    /// FPS sampling window
    pub const FPS_SAMPLE_MS: u64 = 1000;

    /// How long a key stays held after its last press or repeat when the
    /// terminal never reports releases. Longer than common auto-repeat delays.
    pub const KEY_RELEASE_FALLBACK_MS: u64 = 700;

    /// Entries in the trig table, one per integer degree
    pub const TRIG_POINTS: usize = 360;

    pub const PHOTON_COUNT: usize = 16;
    pub const PHOTON_SPEED: f32 = 50.0;
    pub const PHOTON_RADIUS: f32 = 2.0;
    pub const PHOTON_COOLDOWN: f32 = 0.1;
    /// Seconds between automatic shots
    pub const PHOTON_AUTO_FIRE_INTERVAL: f32 = 1.0;
    /// Segments used to outline a photon
    pub const PHOTON_SEGMENTS: usize = 20;

    pub const SHIP_BASE_RADIUS: f32 = 10.0;
    /// Ship silhouette: nose, left flank, tail notch, right flank
    pub const SHIP_RADII_RATIOS: [f32; 4] = [2.0, 1.0, -0.5, 1.0];
    pub const SHIP_MAX_SPEED: f32 = 350.0; // pixels per second
    pub const SHIP_THRUST: f32 = 100.0; // pixels per second²
    pub const SHIP_ROTATION_SPEED: f32 = 270.0; // degrees per second

    pub const ASTEROID_COUNT: usize = 8;
    pub const ASTEROID_MAX_SPEED: f32 = 50.0; // pixels per second
    pub const ASTEROID_SIDE_COUNT_MIN: usize = 6;
    pub const ASTEROID_SIDE_COUNT_MAX: usize = 12;
    pub const ASTEROID_BASE_RADIUS: f32 = 30.0;
    pub const ASTEROID_JITTER: f32 = 0.2;
    pub const ASTEROID_ROTATION_SPEED: f32 = 90.0; // degrees per second
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
