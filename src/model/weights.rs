//! Weight vector helpers shared by the weighted models

use rand::Rng;
use rand_distr::{Distribution, Exp1};

use crate::error::ModelError;

/// Check that `weights` has `expected` non-negative finite entries, not all zero
pub fn validate(weights: &[f64], expected: usize) -> Result<(), ModelError> {
    if weights.len() != expected {
        return Err(ModelError::DimensionMismatch {
            expected,
            actual: weights.len(),
        });
    }
    if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(ModelError::InvalidWeights(format!(
            "weight {w} is negative or not finite"
        )));
    }
    if weights.iter().all(|&w| w == 0.0) {
        return Err(ModelError::InvalidWeights("all weights are zero".to_string()));
    }
    Ok(())
}

/// Draw a weight vector uniformly from the unit simplex
///
/// Uses normalized unit exponentials, which is Dirichlet(1, ..., 1).
pub fn sample_simplex<R: Rng>(dimension: usize, rng: &mut R) -> Vec<f64> {
    let draws: Vec<f64> = (0..dimension).map(|_| Exp1.sample(rng)).collect();
    let total: f64 = draws.iter().sum();
    if total <= 0.0 {
        return vec![1.0 / dimension as f64; dimension];
    }
    draws.into_iter().map(|d| d / total).collect()
}

/// Clamp negative entries to zero and rescale to sum to one
///
/// A vector that collapses to all zeros becomes uniform.
pub fn project_to_simplex(weights: &mut [f64]) {
    for w in weights.iter_mut() {
        if !w.is_finite() || *w < 0.0 {
            *w = 0.0;
        }
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        let uniform = 1.0 / weights.len() as f64;
        weights.iter_mut().for_each(|w| *w = uniform);
    } else {
        weights.iter_mut().for_each(|w| *w /= total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_validate() {
        assert!(validate(&[0.5, 0.5], 2).is_ok());
        assert!(matches!(
            validate(&[0.5, 0.5], 3),
            Err(ModelError::DimensionMismatch { .. })
        ));
        assert!(validate(&[-0.1, 1.1], 2).is_err());
        assert!(validate(&[f64::NAN, 1.0], 2).is_err());
        assert!(validate(&[0.0, 0.0], 2).is_err());
    }

    #[test]
    fn test_sample_simplex_sums_to_one() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for dim in 1..6 {
            let w = sample_simplex(dim, &mut rng);
            assert_eq!(w.len(), dim);
            assert!(w.iter().all(|&x| x >= 0.0));
            assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_project_to_simplex() {
        let mut w = vec![-1.0, 1.0, 3.0];
        project_to_simplex(&mut w);
        assert_eq!(w, vec![0.0, 0.25, 0.75]);

        let mut w = vec![-1.0, 0.0];
        project_to_simplex(&mut w);
        assert_eq!(w, vec![0.5, 0.5]);
    }
}
