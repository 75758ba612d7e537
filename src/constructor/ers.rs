//! Evolutionary Rejection Sampling
//!
//! Keeps a bounded population of compatible models across calls. Each call re-checks
//! the population against the new snapshot, tops it up with random models, and then
//! breeds offspring from tournament-selected parents. Only offspring that pass the
//! same compatibility test as FRS enter the population; a full population evicts its
//! least fit member.
//!
//! Fitness is the most-discriminative score against the current snapshot, so the
//! population drifts towards models with large worst-case margins.

use std::marker::PhantomData;
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::bundle::CandidateBundle;
use super::queue::ModelsQueue;
use super::selection::TournamentSelection;
use super::traits::{validate_snapshot, ModelConstructor};
use crate::compatibility::{
    is_compatible, most_discriminative_with, StatementAnalyzer, ALWAYS_COMPATIBLE,
};
use crate::context::DecisionContext;
use crate::diagnostics::ConstructionStats;
use crate::error::{DecisionError, DmResult};
use crate::model::traits::{OffspringConstructor, RandomModel, ValueModel};
use crate::preference::statement::PreferenceStatement;

/// Configuration for ERS
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErsConfig {
    /// Capacity of the model population
    pub population_size: usize,
    /// Maximum random draws per call while filling the population
    pub initial_sampling_limit: usize,
    /// Offspring bred per call
    pub offspring_count: usize,
    /// Draws per parent tournament
    pub tournament_size: usize,
    /// Population size at or below which the result is inconsistent
    pub inconsistency_threshold: usize,
}

impl Default for ErsConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            initial_sampling_limit: 10_000,
            offspring_count: 200,
            tournament_size: 2,
            inconsistency_threshold: 0,
        }
    }
}

/// Builder for Ers
pub struct ErsBuilder<M, G, O> {
    config: ErsConfig,
    generator: G,
    offspring: O,
    _phantom: PhantomData<M>,
}

impl<M: ValueModel> ErsBuilder<M, (), ()> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ErsConfig::default(),
            generator: (),
            offspring: (),
            _phantom: PhantomData,
        }
    }
}

impl<M: ValueModel> Default for ErsBuilder<M, (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ValueModel, G, O> ErsBuilder<M, G, O> {
    /// Set the population capacity
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the random draw limit for filling the population
    pub fn initial_sampling_limit(mut self, limit: usize) -> Self {
        self.config.initial_sampling_limit = limit;
        self
    }

    /// Set the number of offspring bred per call
    pub fn offspring_count(mut self, count: usize) -> Self {
        self.config.offspring_count = count;
        self
    }

    /// Set the tournament size
    pub fn tournament_size(mut self, size: usize) -> Self {
        self.config.tournament_size = size;
        self
    }

    /// Set the inconsistency threshold
    pub fn inconsistency_threshold(mut self, threshold: usize) -> Self {
        self.config.inconsistency_threshold = threshold;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: ErsConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the random model generator
    pub fn generator<NewG>(self, generator: NewG) -> ErsBuilder<M, NewG, O>
    where
        NewG: RandomModel<M>,
    {
        ErsBuilder {
            config: self.config,
            generator,
            offspring: self.offspring,
            _phantom: PhantomData,
        }
    }

    /// Set the offspring operator
    pub fn offspring<NewO>(self, offspring: NewO) -> ErsBuilder<M, G, NewO>
    where
        NewO: OffspringConstructor<M>,
    {
        ErsBuilder {
            config: self.config,
            generator: self.generator,
            offspring,
            _phantom: PhantomData,
        }
    }
}

impl<M, G, O> ErsBuilder<M, G, O>
where
    M: ValueModel,
    G: RandomModel<M>,
    O: OffspringConstructor<M>,
{
    /// Build the Ers instance
    pub fn build(self) -> DmResult<Ers<M, G, O>> {
        if self.config.population_size == 0 {
            return Err(DecisionError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }

        if self.config.tournament_size == 0 {
            return Err(DecisionError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Ers {
            queue: ModelsQueue::new(self.config.population_size),
            selection: TournamentSelection::new(self.config.tournament_size),
            config: self.config,
            generator: self.generator,
            offspring: self.offspring,
            analyzer: StatementAnalyzer::new(),
        })
    }
}

/// Evolutionary Rejection Sampling constructor
pub struct Ers<M, G, O> {
    config: ErsConfig,
    generator: G,
    offspring: O,
    selection: TournamentSelection,
    analyzer: StatementAnalyzer,
    queue: ModelsQueue<M>,
}

impl<M, G, O> Ers<M, G, O>
where
    M: ValueModel,
    G: RandomModel<M>,
    O: OffspringConstructor<M>,
{
    /// Create a builder for Ers
    pub fn builder() -> ErsBuilder<M, (), ()> {
        ErsBuilder::new()
    }

    pub fn config(&self) -> &ErsConfig {
        &self.config
    }

    /// The population carried between calls
    pub fn queue(&self) -> &ModelsQueue<M> {
        &self.queue
    }

    fn fitness(&self, statements: &[PreferenceStatement], model: &M) -> Option<f64> {
        let score = most_discriminative_with(&self.analyzer, statements, Some(model));
        is_compatible(score).then(|| score.unwrap_or(ALWAYS_COMPATIBLE))
    }
}

impl<M, G, O> ModelConstructor<M> for Ers<M, G, O>
where
    M: ValueModel,
    G: RandomModel<M>,
    O: OffspringConstructor<M>,
{
    fn construct<R: Rng>(
        &mut self,
        statements: &[PreferenceStatement],
        ctx: &mut DecisionContext<R>,
    ) -> DmResult<CandidateBundle<M>> {
        let start_time = Instant::now();
        validate_snapshot(statements, ctx.criteria())?;

        let mut stats = ConstructionStats::new();
        let mut evicted = 0usize;

        // Preservation phase
        let update = ctx.take_normalization_update();
        let mut queue = std::mem::replace(&mut self.queue, ModelsQueue::new(1));
        stats.discarded = queue.rescore(|model| {
            if let Some(normalizations) = &update {
                model.set_normalizations(normalizations.clone());
            }
            self.fitness(statements, model)
        });
        stats.preserved = queue.len();

        // Fill phase
        let mut fill_attempts = 0usize;
        while !queue.is_full() && fill_attempts < self.config.initial_sampling_limit {
            fill_attempts += 1;
            let (rng, normalizations) = ctx.sampling_parts();
            let candidate = self.generator.generate(normalizations, rng);
            match self.fitness(statements, &candidate) {
                Some(fitness) => {
                    queue.insert(candidate, fitness);
                    stats.accepted += 1;
                }
                None => stats.rejected += 1,
            }
        }

        if !queue.is_full() {
            warn!(
                population = queue.len(),
                capacity = queue.capacity(),
                sampling_limit = self.config.initial_sampling_limit,
                "ERS could not fill its population within the sampling limit"
            );
        }

        // Evolution phase
        for _ in 0..self.config.offspring_count {
            if queue.is_empty() {
                break;
            }
            let rng = ctx.rng();
            let (first, second) = self.selection.select_parents(queue.len(), rng);
            let child = self
                .offspring
                .construct(&queue[first].model, &queue[second].model, rng);
            match self.fitness(statements, &child) {
                Some(fitness) => {
                    stats.accepted += 1;
                    if queue.insert(child, fitness).is_some() {
                        evicted += 1;
                    }
                }
                None => stats.rejected += 1,
            }
        }

        self.queue = queue;
        let stats = stats.with_elapsed(start_time.elapsed());
        debug!(
            statements = statements.len(),
            accepted = stats.accepted,
            rejected = stats.rejected,
            preserved = stats.preserved,
            evicted,
            "ERS construction finished"
        );

        let bundle = CandidateBundle::new(
            self.queue.models(),
            self.config.inconsistency_threshold,
            stats,
        );
        if bundle.inconsistent {
            warn!(
                models = bundle.len(),
                threshold = self.config.inconsistency_threshold,
                "ERS found preference information inconsistent"
            );
        }
        Ok(bundle)
    }

    fn inconsistency_threshold(&self) -> usize {
        self.config.inconsistency_threshold
    }

    fn reset(&mut self) {
        self.queue.clear();
    }

    fn name(&self) -> &'static str {
        "ERS"
    }
}
