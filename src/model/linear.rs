//! Weighted additive utility

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::traits::{PreferenceDirection, RandomModel, ValueModel, WeightedModel};
use super::weights;
use crate::criteria::Normalization;
use crate::error::ModelError;

/// Weighted sum of per-criterion utilities `1 - normalized value`
///
/// Larger utilities are better; the ideal point scores the sum of the weights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearUtility {
    weights: Vec<f64>,
    normalizations: Vec<Normalization>,
}

impl LinearUtility {
    pub fn new(weights: Vec<f64>, normalizations: Vec<Normalization>) -> Result<Self, ModelError> {
        weights::validate(&weights, normalizations.len())?;
        Ok(Self {
            weights,
            normalizations,
        })
    }
}

impl ValueModel for LinearUtility {
    fn evaluate(&self, performance: &[f64]) -> f64 {
        debug_assert_eq!(performance.len(), self.weights.len());

        self.weights
            .iter()
            .zip(&self.normalizations)
            .zip(performance)
            .map(|((w, n), &x)| w * (1.0 - n.apply(x)))
            .sum()
    }

    fn direction(&self) -> PreferenceDirection {
        PreferenceDirection::MorePreferred
    }

    fn normalizations(&self) -> &[Normalization] {
        &self.normalizations
    }

    fn set_normalizations(&mut self, normalizations: Vec<Normalization>) {
        self.normalizations = normalizations;
    }
}

impl WeightedModel for LinearUtility {
    fn weights(&self) -> &[f64] {
        &self.weights
    }

    fn with_weights(&self, weights: Vec<f64>) -> Self {
        Self {
            weights,
            normalizations: self.normalizations.clone(),
        }
    }
}

/// Draws `LinearUtility` models with uniform simplex weights
#[derive(Clone, Debug, Default)]
pub struct RandomLinearUtility;

impl RandomLinearUtility {
    pub fn new() -> Self {
        Self
    }
}

impl RandomModel<LinearUtility> for RandomLinearUtility {
    fn generate<R: Rng>(&self, normalizations: &[Normalization], rng: &mut R) -> LinearUtility {
        LinearUtility {
            weights: weights::sample_simplex(normalizations.len(), rng),
            normalizations: normalizations.to_vec(),
        }
    }
}
