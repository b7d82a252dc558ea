//! Fixed-capacity projectile pool
//!
//! Slot index is identity. A slot is live while its `active` flag is set;
//! an inactive slot keeps stale position/velocity that nothing reads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::WorldBounds;
use super::trig::TrigTable;

/// One projectile slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Photon {
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotonPool {
    slots: Vec<Photon>,
    active: usize,
}

impl PhotonPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Photon::default(); capacity],
            active: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Claim the first free slot and launch from `origin` along `angle`.
    ///
    /// Returns `false` when every slot is in flight; the shot is dropped.
    pub fn fire(&mut self, origin: Vec2, angle: f32, speed: f32, trig: &TrigTable) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|p| !p.active) else {
            return false;
        };

        let (cos, sin) = trig.cos_sin(angle);
        *slot = Photon {
            pos: origin,
            vel: Vec2::new(cos, -sin) * speed,
            active: true,
        };
        self.active += 1;
        true
    }

    /// Advance live photons; any that leave the world are retired, not wrapped
    pub fn update(&mut self, dt: f32, bounds: &WorldBounds) {
        for photon in self.slots.iter_mut().filter(|p| p.active) {
            photon.pos += photon.vel * dt;
            if !bounds.contains(photon.pos) {
                photon.active = false;
                self.active -= 1;
            }
        }
    }

    /// Live photons in slot order
    pub fn iter_active(&self) -> impl Iterator<Item = &Photon> {
        self.slots.iter().filter(|p| p.active)
    }

    /// All slots, live or not
    pub fn slots(&self) -> &[Photon] {
        &self.slots
    }
}
