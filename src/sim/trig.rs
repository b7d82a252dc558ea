//! Per-degree sine/cosine lookup
//!
//! Every rotation in the simulation goes through this table so that all
//! objects share the same 1° quantization and no per-frame code calls the
//! transcendental functions directly.

use std::sync::LazyLock;

use crate::consts::TRIG_POINTS;

static TABLE: LazyLock<TrigTable> = LazyLock::new(|| TrigTable::new(TRIG_POINTS));

/// Process-wide table, built on first use and read-only afterwards
#[inline]
pub fn trig() -> &'static TrigTable {
    &TABLE
}

/// Precomputed sine/cosine for integer degrees `0..len`
#[derive(Debug, Clone)]
pub struct TrigTable {
    sin: Vec<f32>,
    cos: Vec<f32>,
}

impl TrigTable {
    pub fn new(points: usize) -> Self {
        let step = std::f32::consts::PI / 180.0;
        let (sin, cos) = (0..points)
            .map(|i| {
                let angle = i as f32 * step;
                (angle.sin(), angle.cos())
            })
            .unzip();
        Self { sin, cos }
    }

    pub fn len(&self) -> usize {
        self.sin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sin.is_empty()
    }

    /// Table slot for a normalized angle in degrees
    #[inline]
    fn index(&self, degrees: f32) -> usize {
        degrees as usize % self.sin.len()
    }

    #[inline]
    pub fn sin(&self, degrees: f32) -> f32 {
        self.sin[self.index(degrees)]
    }

    #[inline]
    pub fn cos(&self, degrees: f32) -> f32 {
        self.cos[self.index(degrees)]
    }

    /// (cos, sin) pair for one lookup
    #[inline]
    pub fn cos_sin(&self, degrees: f32) -> (f32, f32) {
        let i = self.index(degrees);
        (self.cos[i], self.sin[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(trig().len(), 360);
        assert_eq!(TrigTable::new(90).len(), 90);
    }

    #[test]
    fn test_cardinal_angles() {
        let t = trig();
        assert_eq!(t.sin(0.0), 0.0);
        assert_eq!(t.cos(0.0), 1.0);
        assert!((t.sin(90.0) - 1.0).abs() < 1e-6);
        assert!(t.cos(90.0).abs() < 1e-6);
        assert!((t.cos(180.0) + 1.0).abs() < 1e-6);
        assert!((t.sin(270.0) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_fractional_degrees_floor() {
        let t = trig();
        assert_eq!(t.sin(45.9), t.sin(45.0));
        assert_eq!(t.cos_sin(10.5), (t.cos(10.0), t.sin(10.0)));
    }

    #[test]
    fn test_index_wraps_at_table_length() {
        let t = trig();
        assert_eq!(t.sin(360.0), t.sin(0.0));
        assert_eq!(t.cos(450.0), t.cos(90.0));
    }
}
