//! Output of a model construction call

use crate::diagnostics::ConstructionStats;
use crate::model::traits::ValueModel;

/// Candidate models compatible with a history snapshot
///
/// Produced once per construction call and not modified afterwards.
#[derive(Clone, Debug)]
pub struct CandidateBundle<M: ValueModel> {
    /// Accepted models (preserved ones first, then freshly generated ones)
    pub models: Vec<M>,
    /// True when too few compatible models were found
    pub inconsistent: bool,
    /// Counters for the call
    pub stats: ConstructionStats,
}

impl<M: ValueModel> CandidateBundle<M> {
    /// Assemble a bundle, flagging it inconsistent when at most `threshold` models were found
    pub fn new(models: Vec<M>, inconsistency_threshold: usize, stats: ConstructionStats) -> Self {
        let inconsistent = models.len() <= inconsistency_threshold;
        Self {
            models,
            inconsistent,
            stats,
        }
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Shorthand for `!inconsistent`
    pub fn is_consistent(&self) -> bool {
        !self.inconsistent
    }
}
