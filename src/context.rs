//! Decision-making context
//!
//! One context per decision maker: it owns the criterion space, the single random
//! stream all constructors draw from, and the current normalization of the objective
//! space. It is passed explicitly to every construction call.

use rand::Rng;

use crate::criteria::{Criteria, Normalization};
use crate::error::ModelError;

/// Explicit state threaded through model construction
#[derive(Clone, Debug)]
pub struct DecisionContext<R> {
    criteria: Criteria,
    rng: R,
    normalizations: Vec<Normalization>,
    normalizations_changed: bool,
}

impl<R: Rng> DecisionContext<R> {
    /// Create a context whose criteria are already scaled to [0, 1]
    pub fn new(criteria: Criteria, rng: R) -> Self {
        let normalizations = criteria.identity_normalizations();
        Self {
            criteria,
            rng,
            normalizations,
            normalizations_changed: false,
        }
    }

    /// Create a context with explicit normalizations
    pub fn with_normalizations(
        criteria: Criteria,
        rng: R,
        normalizations: Vec<Normalization>,
    ) -> Result<Self, ModelError> {
        check_len(&criteria, &normalizations)?;
        Ok(Self {
            criteria,
            rng,
            normalizations,
            normalizations_changed: false,
        })
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// The random stream shared by all constructors of this context
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Current normalizations of the objective space
    pub fn normalizations(&self) -> &[Normalization] {
        &self.normalizations
    }

    /// Record that the objective space was rescaled
    ///
    /// The next construction call swaps these normalizations into its preserved models.
    pub fn update_normalizations(
        &mut self,
        normalizations: Vec<Normalization>,
    ) -> Result<(), ModelError> {
        check_len(&self.criteria, &normalizations)?;
        self.normalizations = normalizations;
        self.normalizations_changed = true;
        Ok(())
    }

    /// Whether normalizations changed since the last construction call
    pub fn normalizations_changed(&self) -> bool {
        self.normalizations_changed
    }

    /// Take the pending normalization update, clearing the changed flag
    pub fn take_normalization_update(&mut self) -> Option<Vec<Normalization>> {
        if !self.normalizations_changed {
            return None;
        }
        self.normalizations_changed = false;
        Some(self.normalizations.clone())
    }

    /// Split into the random stream and the normalizations for a single draw
    pub fn sampling_parts(&mut self) -> (&mut R, &[Normalization]) {
        (&mut self.rng, &self.normalizations)
    }
}

fn check_len(criteria: &Criteria, normalizations: &[Normalization]) -> Result<(), ModelError> {
    if normalizations.len() != criteria.len() {
        return Err(ModelError::DimensionMismatch {
            expected: criteria.len(),
            actual: normalizations.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn context() -> DecisionContext<rand::rngs::StdRng> {
        DecisionContext::new(Criteria::costs(2), rand::rngs::StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_new_uses_identity() {
        let ctx = context();
        assert_eq!(ctx.normalizations().len(), 2);
        assert!(!ctx.normalizations_changed());
    }

    #[test]
    fn test_update_and_take() {
        let mut ctx = context();
        let norms = vec![Normalization::new(0.0, 10.0), Normalization::new(0.0, 5.0)];
        ctx.update_normalizations(norms.clone()).unwrap();
        assert!(ctx.normalizations_changed());

        assert_eq!(ctx.take_normalization_update(), Some(norms.clone()));
        assert!(!ctx.normalizations_changed());
        assert_eq!(ctx.take_normalization_update(), None);
        assert_eq!(ctx.normalizations(), norms.as_slice());
    }

    #[test]
    fn test_update_rejects_wrong_length() {
        let mut ctx = context();
        assert!(ctx
            .update_normalizations(vec![Normalization::new(0.0, 1.0)])
            .is_err());
        assert!(!ctx.normalizations_changed());
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = context();
        let mut b = context();
        let xa: Vec<f64> = (0..5).map(|_| a.rng().gen()).collect();
        let xb: Vec<f64> = (0..5).map(|_| b.rng().gen()).collect();
        assert_eq!(xa, xb);
    }
}
