//! Inconsistency repair
//!
//! When a constructor cannot find enough models compatible with the whole history,
//! some statements have to go. [`RemoveOldest`] drops the oldest statement, rebuilds,
//! and repeats until the constructor reports consistency again.

use rand::Rng;
use tracing::{debug, warn};

use crate::constructor::bundle::CandidateBundle;
use crate::constructor::traits::ModelConstructor;
use crate::context::DecisionContext;
use crate::diagnostics::ConstructionStats;
use crate::error::{DecisionError, DmResult};
use crate::model::traits::ValueModel;
use crate::preference::history::{History, HistoryEntry};

/// Models and statements after consistency was restored
#[derive(Clone, Debug)]
pub struct ConsistentState<M: ValueModel> {
    /// Models built from the remaining statements
    pub models: Vec<M>,
    /// Statements still in the history, oldest first
    pub remaining: Vec<HistoryEntry>,
}

/// Outcome of a repair pass
#[derive(Clone, Debug)]
pub struct ConsistencyReport<M: ValueModel> {
    pub consistent_state: ConsistentState<M>,
    /// Removed entries, oldest first
    pub removed: Vec<HistoryEntry>,
    /// Number of reconstruction calls made
    pub reconstructions: usize,
    /// Statistics of the last construction call
    pub stats: ConstructionStats,
    /// Every intermediate bundle, if trace collection is enabled
    pub trace: Option<Vec<CandidateBundle<M>>>,
}

impl<M: ValueModel> ConsistencyReport<M> {
    /// Whether any statement had to be removed
    pub fn removed_any(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Restores consistency between a constructor and the history
pub trait InconsistencyHandler {
    /// Repair the history until `constructor` reports consistency
    ///
    /// `bundle` is the result that triggered the repair. A consistent bundle is
    /// returned unchanged, with nothing removed.
    fn reintroduce_consistency<M, C, R>(
        &self,
        bundle: CandidateBundle<M>,
        constructor: &mut C,
        history: &mut History,
        ctx: &mut DecisionContext<R>,
    ) -> DmResult<ConsistencyReport<M>>
    where
        M: ValueModel,
        C: ModelConstructor<M>,
        R: Rng;
}

/// Drops the oldest statement until the constructor finds enough compatible models
///
/// Fails with [`DecisionError::DegenerateModelFamily`] if even the empty history is
/// inconsistent.
#[derive(Clone, Debug, Default)]
pub struct RemoveOldest {
    collect_trace: bool,
}

impl RemoveOldest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep every intermediate bundle in the report
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.collect_trace = enabled;
        self
    }
}

impl InconsistencyHandler for RemoveOldest {
    fn reintroduce_consistency<M, C, R>(
        &self,
        bundle: CandidateBundle<M>,
        constructor: &mut C,
        history: &mut History,
        ctx: &mut DecisionContext<R>,
    ) -> DmResult<ConsistencyReport<M>>
    where
        M: ValueModel,
        C: ModelConstructor<M>,
        R: Rng,
    {
        let mut trace = self.collect_trace.then(Vec::new);
        let mut removed: Vec<HistoryEntry> = Vec::new();
        let mut reconstructions = 0usize;
        let mut current = bundle;

        while current.inconsistent {
            let Some(entry) = history.remove_oldest() else {
                warn!(
                    constructor = constructor.name(),
                    removed = removed.len(),
                    "history exhausted without restoring consistency"
                );
                return Err(DecisionError::DegenerateModelFamily {
                    removed: removed.len(),
                });
            };
            debug!(
                iteration = entry.iteration,
                statement = %entry.statement,
                "removed oldest preference statement"
            );
            removed.push(entry);

            current = constructor.construct(&history.snapshot(), ctx)?;
            reconstructions += 1;
            if let Some(trace) = trace.as_mut() {
                trace.push(current.clone());
            }
        }

        if !removed.is_empty() {
            debug!(
                constructor = constructor.name(),
                removed = removed.len(),
                remaining = history.len(),
                "consistency restored"
            );
        }

        Ok(ConsistencyReport {
            consistent_state: ConsistentState {
                models: current.models,
                remaining: history.entries(),
            },
            removed,
            reconstructions,
            stats: current.stats,
            trace,
        })
    }
}

/// Repair with [`RemoveOldest`] without collecting a trace
pub fn reintroduce_consistency<M, C, R>(
    bundle: CandidateBundle<M>,
    constructor: &mut C,
    history: &mut History,
    ctx: &mut DecisionContext<R>,
) -> DmResult<ConsistencyReport<M>>
where
    M: ValueModel,
    C: ModelConstructor<M>,
    R: Rng,
{
    RemoveOldest::new().reintroduce_consistency(bundle, constructor, history, ctx)
}

pub mod prelude {
    pub use super::{
        reintroduce_consistency, ConsistencyReport, ConsistentState, InconsistencyHandler,
        RemoveOldest,
    };
}
