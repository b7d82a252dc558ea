//! Closed polygon outlines in object-local space
//!
//! A shape with N sides stores N + 1 points: the last point repeats the
//! first so a single line strip draws the whole outline.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::trig::TrigTable;

/// Rejected polygon construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("a polygon needs at least 3 sides, got {sides}")]
    TooFewSides { sides: usize },
    #[error("{sides} sides need {sides} radii, got {radii}")]
    RadiiMismatch { sides: usize, radii: usize },
    #[error("outline is not closed: last point differs from the first")]
    Unclosed,
}

/// Immutable closed outline around the local origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawShape")]
pub struct Shape {
    points: Vec<Vec2>,
}

/// Unchecked wire form of [`Shape`]
#[derive(Deserialize)]
struct RawShape {
    points: Vec<Vec2>,
}

impl TryFrom<RawShape> for Shape {
    type Error = ShapeError;

    fn try_from(raw: RawShape) -> Result<Self, Self::Error> {
        let points = raw.points;
        if points.len() < 4 {
            return Err(ShapeError::TooFewSides {
                sides: points.len().saturating_sub(1),
            });
        }
        if points.first() != points.last() {
            return Err(ShapeError::Unclosed);
        }
        Ok(Self { points })
    }
}

impl Shape {
    /// Build a polygon with one radius per vertex.
    ///
    /// Vertex `i` sits at table angle `i * (360 / sides)` (integer step), at
    /// distance `radii[i]` from the origin, with y flipped for screen space.
    /// Equal radii give a regular polygon; negative radii place the vertex on
    /// the opposite side of the origin.
    pub fn build(radii: &[f32], sides: usize, trig: &TrigTable) -> Result<Self, ShapeError> {
        if sides < 3 {
            return Err(ShapeError::TooFewSides { sides });
        }
        if radii.len() < sides {
            return Err(ShapeError::RadiiMismatch {
                sides,
                radii: radii.len(),
            });
        }

        let step = 360 / sides;
        let mut points = Vec::with_capacity(sides + 1);
        for (i, &radius) in radii.iter().take(sides).enumerate() {
            let (cos, sin) = trig.cos_sin(((i * step) % 360) as f32);
            points.push(Vec2::new(radius * cos, radius * -sin));
        }
        points.push(points[0]);

        Ok(Self { points })
    }

    /// Regular polygon with every vertex at `radius`
    pub fn regular(radius: f32, sides: usize, trig: &TrigTable) -> Result<Self, ShapeError> {
        Self::build(&vec![radius; sides], sides, trig)
    }

    /// Points including the closing duplicate
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of stored points (sides + 1)
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn sides(&self) -> usize {
        self.points.len() - 1
    }
}

/// Per-vertex radii of `base ± base * jitter`, sign picked per vertex
pub fn jittered_radii<R: Rng>(rng: &mut R, base: f32, jitter: f32, sides: usize) -> Vec<f32> {
    let offset = base * jitter;
    (0..sides)
        .map(|_| if rng.random_bool(0.5) { base + offset } else { base - offset })
        .collect()
}
