//! Offspring construction for evolutionary model search

use std::cmp::Ordering;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::traits::{OffspringConstructor, WeightedModel};
use super::weights;

/// Convex combination of parent weights with optional Gaussian perturbation
///
/// The child takes `alpha * w1 + (1 - alpha) * w2` with `alpha ~ U(0, 1)`, adds noise
/// with standard deviation `sigma` to every weight, then projects back onto the
/// simplex. Parents are first put in a canonical order (lexicographic by weights), so
/// swapping them gives the same child for the same random stream. All other parameters
/// are inherited from the canonical first parent.
#[derive(Clone, Debug)]
pub struct WeightsCrossover {
    /// Standard deviation of the per-weight Gaussian noise
    pub sigma: f64,
}

impl WeightsCrossover {
    /// Create a new crossover with the given noise level
    pub fn new(sigma: f64) -> Self {
        assert!(sigma >= 0.0, "Sigma must be non-negative");
        Self { sigma }
    }

    /// Pure convex combination without noise
    pub fn convex() -> Self {
        Self::new(0.0)
    }
}

impl Default for WeightsCrossover {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl<M: WeightedModel> OffspringConstructor<M> for WeightsCrossover {
    fn construct<R: Rng>(&self, first: &M, second: &M, rng: &mut R) -> M {
        let (first, second) = match first.weights().partial_cmp(second.weights()) {
            Some(Ordering::Greater) => (second, first),
            _ => (first, second),
        };

        let alpha: f64 = rng.gen();
        let mut child: Vec<f64> = first
            .weights()
            .iter()
            .zip(second.weights())
            .map(|(a, b)| alpha * a + (1.0 - alpha) * b)
            .collect();

        if self.sigma > 0.0 {
            if let Ok(normal) = Normal::new(0.0, self.sigma) {
                for w in child.iter_mut() {
                    *w += normal.sample(rng);
                }
            }
        }

        weights::project_to_simplex(&mut child);
        first.with_weights(child)
    }
}
