//! Per-criterion normalization
//!
//! A [`Normalization`] maps raw criterion values onto a scale where the ideal value sits
//! at 0 and the nadir value at 1. Because the ideal may be larger than the nadir (for
//! criteria that are maximized), the same affine map handles both directions.

use serde::{Deserialize, Serialize};

use super::Direction;

/// Affine normalization of a single criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    /// Raw value mapped to 0
    pub ideal: f64,
    /// Raw value mapped to 1
    pub nadir: f64,
}

impl Normalization {
    /// Create a normalization from its ideal and nadir values
    pub fn new(ideal: f64, nadir: f64) -> Self {
        Self { ideal, nadir }
    }

    /// Normalization for a criterion already scaled to [0, 1]
    pub fn identity(direction: Direction) -> Self {
        Self::from_range(direction, 0.0, 1.0)
    }

    /// Build a normalization from an observed `[min, max]` range
    ///
    /// For minimized criteria the ideal is `min`, for maximized criteria it is `max`.
    pub fn from_range(direction: Direction, min: f64, max: f64) -> Self {
        match direction {
            Direction::Minimize => Self::new(min, max),
            Direction::Maximize => Self::new(max, min),
        }
    }

    /// Signed span between nadir and ideal
    pub fn span(&self) -> f64 {
        self.nadir - self.ideal
    }

    /// Normalize a raw value; a collapsed range maps every value to 0
    pub fn apply(&self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        (value - self.ideal) / span
    }

    /// Map a normalized value back to the raw scale
    pub fn invert(&self, normalized: f64) -> f64 {
        self.ideal + normalized * self.span()
    }
}
