//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Steps are driven by an explicit `dt`
//! - Seeded RNG only, used once at population time
//! - Rotation through the shared trig table only
//! - No rendering or platform dependencies beyond the input event types

pub mod input;
pub mod motion;
pub mod photon;
pub mod shape;
pub mod state;
pub mod tick;
pub mod transform;
pub mod trig;

pub use input::{Control, InputState};
pub use motion::{Body, WorldBounds};
pub use photon::{Photon, PhotonPool};
pub use shape::{Shape, ShapeError};
pub use state::World;
pub use tick::{ClockTick, FrameClock};
pub use transform::{transform, transform_into};
pub use trig::{TrigTable, trig};
