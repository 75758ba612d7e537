//! Value model traits
//!
//! A value model scalarizes an alternative's performance vector. The engine only relies
//! on the [`ValueModel`] capability; where models come from is delegated to a
//! [`RandomModel`] generator and an [`OffspringConstructor`].

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::criteria::Normalization;
use crate::preference::alternative::Alternative;

/// Which end of a model's scale is better
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferenceDirection {
    /// Smaller model values are better (distances, costs)
    LessPreferred,
    /// Larger model values are better (utilities)
    MorePreferred,
}

impl PreferenceDirection {
    /// Margin by which `value` beats `other`; positive means strictly better
    pub fn margin(self, value: f64, other: f64) -> f64 {
        match self {
            Self::LessPreferred => other - value,
            Self::MorePreferred => value - other,
        }
    }

    /// Returns true if `value` is strictly better than `other`
    pub fn is_better(self, value: f64, other: f64) -> bool {
        self.margin(value, other) > 0.0
    }
}

/// A scalarizing function over performance vectors
pub trait ValueModel: Clone + fmt::Debug + Send + Sync {
    /// Score a performance vector with one value per criterion
    fn evaluate(&self, performance: &[f64]) -> f64;

    /// Whether smaller or larger scores are better
    fn direction(&self) -> PreferenceDirection;

    /// Per-criterion normalizations currently in use
    fn normalizations(&self) -> &[Normalization];

    /// Swap in new normalizations after the objective space was rescaled
    ///
    /// This keeps the model's identity and all other parameters.
    fn set_normalizations(&mut self, normalizations: Vec<Normalization>);

    /// Score an alternative
    fn evaluate_alternative(&self, alternative: &Alternative) -> f64 {
        self.evaluate(alternative.performance())
    }
}

/// A value model parameterized by a weight vector on the simplex
pub trait WeightedModel: ValueModel {
    /// The weights, one per criterion
    fn weights(&self) -> &[f64];

    /// A copy of this model with different weights
    ///
    /// Weights are expected to be valid (non-negative, summing to one).
    fn with_weights(&self, weights: Vec<f64>) -> Self;
}

/// Generator producing one fresh random model per call
pub trait RandomModel<M: ValueModel>: Send + Sync {
    /// Draw a model for a criterion space with the given normalizations
    fn generate<R: Rng>(&self, normalizations: &[Normalization], rng: &mut R) -> M;
}

/// Combines two parent models into one candidate
///
/// The child must not depend on the order of the parents: for the same random stream,
/// `construct(a, b)` and `construct(b, a)` yield the same model.
pub trait OffspringConstructor<M: ValueModel>: Send + Sync {
    fn construct<R: Rng>(&self, first: &M, second: &M, rng: &mut R) -> M;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_margin() {
        assert_eq!(PreferenceDirection::LessPreferred.margin(0.3, 0.4), 0.4 - 0.3);
        assert_eq!(PreferenceDirection::MorePreferred.margin(0.3, 0.4), 0.3 - 0.4);
    }

    #[test]
    fn test_direction_is_better() {
        assert!(PreferenceDirection::LessPreferred.is_better(1.0, 2.0));
        assert!(!PreferenceDirection::LessPreferred.is_better(2.0, 2.0));
        assert!(PreferenceDirection::MorePreferred.is_better(2.0, 1.0));
    }
}
