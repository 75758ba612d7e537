//! Fast Rejection Sampling
//!
//! Monte-Carlo construction of compatible value models: draw random models, keep the
//! ones whose worst-case compatibility with the history is positive. Models accepted
//! in one call are re-checked at the start of the next one and kept if still valid.

use std::marker::PhantomData;
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::bundle::CandidateBundle;
use super::traits::{validate_snapshot, ModelConstructor};
use crate::compatibility::{is_compatible, most_discriminative_with, StatementAnalyzer};
use crate::context::DecisionContext;
use crate::diagnostics::ConstructionStats;
use crate::error::DmResult;
use crate::model::traits::{RandomModel, ValueModel};
use crate::preference::statement::PreferenceStatement;

/// Configuration for FRS
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrsConfig {
    /// Number of compatible models to return
    pub feasible_samples_to_generate: usize,
    /// Maximum number of random draws per call
    pub sampling_limit: usize,
    /// Accepted-model count at or below which the result is inconsistent
    pub inconsistency_threshold: usize,
}

impl Default for FrsConfig {
    fn default() -> Self {
        Self {
            feasible_samples_to_generate: 100,
            sampling_limit: 10_000,
            inconsistency_threshold: 0,
        }
    }
}

/// Builder for Frs
pub struct FrsBuilder<M, G> {
    config: FrsConfig,
    generator: G,
    _phantom: PhantomData<M>,
}

impl<M: ValueModel> FrsBuilder<M, ()> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: FrsConfig::default(),
            generator: (),
            _phantom: PhantomData,
        }
    }
}

impl<M: ValueModel> Default for FrsBuilder<M, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ValueModel, G> FrsBuilder<M, G> {
    /// Set the number of compatible models to return
    pub fn feasible_samples(mut self, count: usize) -> Self {
        self.config.feasible_samples_to_generate = count;
        self
    }

    /// Set the maximum number of random draws per call
    pub fn sampling_limit(mut self, limit: usize) -> Self {
        self.config.sampling_limit = limit;
        self
    }

    /// Set the inconsistency threshold
    pub fn inconsistency_threshold(mut self, threshold: usize) -> Self {
        self.config.inconsistency_threshold = threshold;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: FrsConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the random model generator
    pub fn generator<NewG>(self, generator: NewG) -> FrsBuilder<M, NewG>
    where
        NewG: RandomModel<M>,
    {
        FrsBuilder {
            config: self.config,
            generator,
            _phantom: PhantomData,
        }
    }
}

impl<M: ValueModel, G: RandomModel<M>> FrsBuilder<M, G> {
    /// Build the Frs instance
    ///
    /// The sampling limit is raised to at least the number of feasible samples.
    pub fn build(self) -> DmResult<Frs<M, G>> {
        let mut config = self.config;
        config.sampling_limit = config
            .sampling_limit
            .max(config.feasible_samples_to_generate);

        Ok(Frs {
            config,
            generator: self.generator,
            analyzer: StatementAnalyzer::new(),
            preserved: Vec::new(),
        })
    }
}

/// Fast Rejection Sampling constructor
pub struct Frs<M, G> {
    config: FrsConfig,
    generator: G,
    analyzer: StatementAnalyzer,
    preserved: Vec<M>,
}

impl<M: ValueModel, G: RandomModel<M>> Frs<M, G> {
    /// Create a builder for Frs
    pub fn builder() -> FrsBuilder<M, ()> {
        FrsBuilder::new()
    }

    pub fn config(&self) -> &FrsConfig {
        &self.config
    }

    /// Models that will be re-checked on the next call
    pub fn preserved(&self) -> &[M] {
        &self.preserved
    }

    /// Seed the models re-checked on the next call
    ///
    /// Entries beyond the feasible sample count are dropped.
    pub fn set_preserved(&mut self, mut models: Vec<M>) {
        models.truncate(self.config.feasible_samples_to_generate);
        self.preserved = models;
    }
}

impl<M: ValueModel, G: RandomModel<M>> ModelConstructor<M> for Frs<M, G> {
    fn construct<R: Rng>(
        &mut self,
        statements: &[PreferenceStatement],
        ctx: &mut DecisionContext<R>,
    ) -> DmResult<CandidateBundle<M>> {
        let start_time = Instant::now();
        validate_snapshot(statements, ctx.criteria())?;

        let target = self.config.feasible_samples_to_generate;
        let mut stats = ConstructionStats::new();
        let mut models: Vec<M> = Vec::with_capacity(target);

        // Preservation phase
        let update = ctx.take_normalization_update();
        for mut model in std::mem::take(&mut self.preserved) {
            if let Some(normalizations) = &update {
                model.set_normalizations(normalizations.clone());
            }
            let score = most_discriminative_with(&self.analyzer, statements, Some(&model));
            if models.len() < target && is_compatible(score) {
                models.push(model);
                stats.preserved += 1;
            } else {
                stats.discarded += 1;
            }
        }

        // Generation phase
        let mut quota = target - models.len();
        while quota > 0 && stats.attempts() < self.config.sampling_limit {
            let (rng, normalizations) = ctx.sampling_parts();
            let candidate = self.generator.generate(normalizations, rng);
            let score = most_discriminative_with(&self.analyzer, statements, Some(&candidate));
            if is_compatible(score) {
                models.push(candidate);
                stats.accepted += 1;
                quota -= 1;
            } else {
                stats.rejected += 1;
            }
        }

        if quota > 0 {
            warn!(
                missing = quota,
                sampling_limit = self.config.sampling_limit,
                "FRS stopped at sampling limit before reaching target"
            );
        }

        self.preserved = models.clone();
        let stats = stats.with_elapsed(start_time.elapsed());
        debug!(
            statements = statements.len(),
            accepted = stats.accepted,
            rejected = stats.rejected,
            preserved = stats.preserved,
            "FRS construction finished"
        );

        let bundle = CandidateBundle::new(models, self.config.inconsistency_threshold, stats);
        if bundle.inconsistent {
            warn!(
                models = bundle.len(),
                threshold = self.config.inconsistency_threshold,
                "FRS found preference information inconsistent"
            );
        }
        Ok(bundle)
    }

    fn inconsistency_threshold(&self) -> usize {
        self.config.inconsistency_threshold
    }

    fn reset(&mut self) {
        self.preserved.clear();
    }

    fn name(&self) -> &'static str {
        "FRS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{Criteria, Normalization};
    use crate::error::DecisionError;
    use crate::model::lnorm::{LNorm, RandomLNorm};
    use crate::model::traits::WeightedModel;
    use crate::preference::alternative::Alternative;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn context(seed: u64) -> DecisionContext<StdRng> {
        DecisionContext::new(Criteria::costs(2), StdRng::seed_from_u64(seed))
    }

    fn frs(feasible: usize, limit: usize) -> Frs<LNorm, RandomLNorm> {
        FrsBuilder::new()
            .feasible_samples(feasible)
            .sampling_limit(limit)
            .generator(RandomLNorm::chebyshev())
            .build()
            .unwrap()
    }

    /// A = (0.4, 0.6) preferred to B = (0.6, 0.4): satisfied by about half of the weights
    fn half_plane() -> Vec<PreferenceStatement> {
        vec![PreferenceStatement::preference(
            Alternative::new(0, vec![0.4, 0.6]),
            Alternative::new(1, vec![0.6, 0.4]),
        )]
    }

    fn contradiction() -> Vec<PreferenceStatement> {
        let a = Alternative::new(0, vec![0.4, 0.6]);
        let b = Alternative::new(1, vec![0.6, 0.4]);
        vec![
            PreferenceStatement::preference(a.clone(), b.clone()),
            PreferenceStatement::preference(b, a),
        ]
    }

    #[test]
    fn test_builder_defaults() {
        let frs: Frs<LNorm, RandomLNorm> = FrsBuilder::new()
            .generator(RandomLNorm::chebyshev())
            .build()
            .unwrap();
        assert_eq!(frs.config(), &FrsConfig::default());
        assert!(frs.preserved().is_empty());
    }

    #[test]
    fn test_builder_raises_sampling_limit() {
        let frs = frs(50, 10);
        assert_eq!(frs.config().sampling_limit, 50);
    }

    #[test]
    fn test_empty_history_accepts_everything() {
        let mut ctx = context(42);
        let mut frs = frs(20, 100);
        let bundle = frs.construct(&[], &mut ctx).unwrap();

        assert_eq!(bundle.len(), 20);
        assert!(!bundle.inconsistent);
        assert_eq!(bundle.stats.accepted, 20);
        assert_eq!(bundle.stats.rejected, 0);
        assert_eq!(bundle.stats.acceptance_rate(), Some(1.0));
    }

    #[test]
    fn test_accepted_models_are_compatible() {
        let mut ctx = context(42);
        let mut frs = frs(30, 10_000);
        let statements = half_plane();
        let bundle = frs.construct(&statements, &mut ctx).unwrap();

        assert_eq!(bundle.len(), 30);
        assert!(bundle.stats.rejected > 0);
        for model in &bundle.models {
            // preferring (0.4, 0.6) over (0.6, 0.4) needs w1 > w2
            assert!(model.weights()[0] > model.weights()[1]);
        }
    }

    #[test]
    fn test_contradiction_is_inconsistent() {
        let mut ctx = context(42);
        let mut frs = frs(10, 200);
        let bundle = frs.construct(&contradiction(), &mut ctx).unwrap();

        assert!(bundle.inconsistent);
        assert!(bundle.is_empty());
        assert_eq!(bundle.stats.rejected, 200);
        assert_eq!(bundle.stats.acceptance_rate(), Some(0.0));
    }

    #[test]
    fn test_full_preservation_skips_generation() {
        let mut ctx = context(42);
        let mut frs = frs(15, 1000);
        let statements = half_plane();
        frs.construct(&statements, &mut ctx).unwrap();

        let bundle = frs.construct(&statements, &mut ctx).unwrap();
        assert_eq!(bundle.stats.preserved, 15);
        assert_eq!(bundle.stats.attempts(), 0);
        assert_eq!(bundle.stats.acceptance_rate(), None);
        assert_eq!(bundle.len(), 15);
    }

    #[test]
    fn test_preservation_discards_invalidated_models() {
        let mut ctx = context(7);
        let mut frs = frs(40, 10_000);
        frs.construct(&[], &mut ctx).unwrap();

        let statements = half_plane();
        let bundle = frs.construct(&statements, &mut ctx).unwrap();
        assert_eq!(bundle.stats.preserved + bundle.stats.discarded, 40);
        assert!(bundle.stats.discarded > 0);
        assert_eq!(bundle.len(), 40);
        assert_eq!(bundle.stats.accepted, bundle.stats.discarded);
    }

    #[test]
    fn test_same_seed_same_models() {
        let statements = half_plane();
        let mut a = frs(10, 1000);
        let mut b = frs(10, 1000);
        let ma = a.construct(&statements, &mut context(99)).unwrap().models;
        let mb = b.construct(&statements, &mut context(99)).unwrap().models;
        assert_eq!(ma, mb);
    }

    #[test]
    fn test_normalization_update_reaches_preserved_models() {
        let mut ctx = context(5);
        let mut frs = frs(5, 100);
        frs.construct(&[], &mut ctx).unwrap();

        let rescaled = vec![Normalization::new(0.0, 10.0), Normalization::new(0.0, 10.0)];
        ctx.update_normalizations(rescaled.clone()).unwrap();
        let bundle = frs.construct(&[], &mut ctx).unwrap();

        assert_eq!(bundle.stats.preserved, 5);
        for model in &bundle.models {
            assert_eq!(model.normalizations(), rescaled.as_slice());
        }
        assert!(!ctx.normalizations_changed());
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let mut ctx = context(0);
        let mut frs = frs(5, 100);
        let statements = vec![PreferenceStatement::preference(
            Alternative::new(0, vec![0.1, 0.2, 0.3]),
            Alternative::new(1, vec![0.3, 0.2, 0.1]),
        )];
        assert!(matches!(
            frs.construct(&statements, &mut ctx),
            Err(DecisionError::Model(_))
        ));
    }

    #[test]
    fn test_zero_target() {
        let mut ctx = context(0);
        let mut frs = frs(0, 0);
        let bundle = frs.construct(&half_plane(), &mut ctx).unwrap();
        assert!(bundle.is_empty());
        assert!(bundle.inconsistent);
        assert_eq!(bundle.stats.attempts(), 0);
    }
}
