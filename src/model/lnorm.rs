//! Weighted Lp-norm distance to the ideal point
//!
//! `LNorm` measures how far an alternative lies from the ideal point of the normalized
//! objective space. Smaller distances are better. An infinite exponent gives the
//! weighted Chebyshev (max) norm, exponent 1 gives the weighted sum.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::traits::{PreferenceDirection, RandomModel, ValueModel, WeightedModel};
use super::weights;
use crate::criteria::Normalization;
use crate::error::ModelError;

/// Weighted Lp distance from the ideal point
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LNorm {
    weights: Vec<f64>,
    exponent: f64,
    normalizations: Vec<Normalization>,
}

impl LNorm {
    /// Create a new model
    ///
    /// `weights` needs one non-negative entry per normalization and `exponent` must be
    /// at least 1 or `f64::INFINITY`.
    pub fn new(
        weights: Vec<f64>,
        exponent: f64,
        normalizations: Vec<Normalization>,
    ) -> Result<Self, ModelError> {
        weights::validate(&weights, normalizations.len())?;
        if exponent.is_nan() || exponent < 1.0 {
            return Err(ModelError::InvalidParameter(format!(
                "exponent must be >= 1, got {exponent}"
            )));
        }
        Ok(Self {
            weights,
            exponent,
            normalizations,
        })
    }

    /// Weighted Chebyshev model (infinite exponent)
    pub fn chebyshev(
        weights: Vec<f64>,
        normalizations: Vec<Normalization>,
    ) -> Result<Self, ModelError> {
        Self::new(weights, f64::INFINITY, normalizations)
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Weighted per-criterion deviations from the ideal
    ///
    /// Values better than the ideal count as the ideal itself.
    fn deviations<'a>(&'a self, performance: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
        self.weights
            .iter()
            .zip(&self.normalizations)
            .zip(performance)
            .map(|((w, n), &x)| w * n.apply(x).max(0.0))
    }
}

impl ValueModel for LNorm {
    fn evaluate(&self, performance: &[f64]) -> f64 {
        debug_assert_eq!(performance.len(), self.weights.len());

        if self.exponent.is_infinite() {
            return self.deviations(performance).fold(0.0, f64::max);
        }
        if self.exponent == 1.0 {
            return self.deviations(performance).sum();
        }
        self.deviations(performance)
            .map(|d| d.powf(self.exponent))
            .sum::<f64>()
            .powf(1.0 / self.exponent)
    }

    fn direction(&self) -> PreferenceDirection {
        PreferenceDirection::LessPreferred
    }

    fn normalizations(&self) -> &[Normalization] {
        &self.normalizations
    }

    fn set_normalizations(&mut self, normalizations: Vec<Normalization>) {
        self.normalizations = normalizations;
    }
}

impl WeightedModel for LNorm {
    fn weights(&self) -> &[f64] {
        &self.weights
    }

    fn with_weights(&self, weights: Vec<f64>) -> Self {
        Self {
            weights,
            exponent: self.exponent,
            normalizations: self.normalizations.clone(),
        }
    }
}

/// Draws `LNorm` models with a fixed exponent and uniform simplex weights
#[derive(Clone, Debug)]
pub struct RandomLNorm {
    /// Exponent given to every generated model
    pub exponent: f64,
}

impl RandomLNorm {
    /// Create a generator
    ///
    /// # Panics
    /// Panics if `exponent` is below 1 or NaN
    pub fn new(exponent: f64) -> Self {
        assert!(exponent >= 1.0, "Exponent must be at least 1");
        Self { exponent }
    }

    /// Generator for weighted Chebyshev models
    pub fn chebyshev() -> Self {
        Self::new(f64::INFINITY)
    }
}

impl RandomModel<LNorm> for RandomLNorm {
    fn generate<R: Rng>(&self, normalizations: &[Normalization], rng: &mut R) -> LNorm {
        LNorm {
            weights: weights::sample_simplex(normalizations.len(), rng),
            exponent: self.exponent,
            normalizations: normalizations.to_vec(),
        }
    }
}
