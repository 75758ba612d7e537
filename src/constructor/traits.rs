//! Model constructor trait

use rand::Rng;

use super::bundle::CandidateBundle;
use crate::context::DecisionContext;
use crate::criteria::Criteria;
use crate::error::{DmResult, ModelError};
use crate::model::traits::ValueModel;
use crate::preference::statement::PreferenceStatement;

/// Builds a set of value models compatible with a history snapshot
///
/// Constructors may keep models between calls and re-check them against the next
/// snapshot. The snapshot is owned by the caller and does not change during a call.
pub trait ModelConstructor<M: ValueModel>: Send {
    /// Run one construction pass
    fn construct<R: Rng>(
        &mut self,
        statements: &[PreferenceStatement],
        ctx: &mut DecisionContext<R>,
    ) -> DmResult<CandidateBundle<M>>;

    /// Accepted-model count at or below which a result is flagged inconsistent
    fn inconsistency_threshold(&self) -> usize;

    /// Forget models kept from previous calls
    fn reset(&mut self);

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Check every alternative in the snapshot matches the criterion space
pub fn validate_snapshot(
    statements: &[PreferenceStatement],
    criteria: &Criteria,
) -> Result<(), ModelError> {
    statements
        .iter()
        .try_for_each(|s| s.check_dimension(criteria.len()))
}
