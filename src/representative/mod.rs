//! Representative model selection
//!
//! Picks the single model that acts on behalf of a set of compatible candidates.
//! The most-discriminative selector (MDVF) is a maximin search: it returns the model
//! whose worst compatibility margin over the history is largest.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::compatibility::{most_discriminative_with, StatementAnalyzer};
use crate::error::{DecisionError, DmResult};
use crate::model::traits::ValueModel;
use crate::preference::statement::PreferenceStatement;

/// Chooses one model out of a candidate list
pub trait RepresentativeSelector<M: ValueModel>: Send + Sync {
    /// Index of the representative in `models`
    ///
    /// Returns `None` for an empty list or when no representative can be determined.
    fn select_index(&self, models: &[M], statements: &[PreferenceStatement]) -> Option<usize>;

    /// Reference to the representative
    fn select<'a>(&self, models: &'a [M], statements: &[PreferenceStatement]) -> Option<&'a M> {
        self.select_index(models, statements).map(|i| &models[i])
    }
}

/// Maximin selector over most-discriminative scores
///
/// Ties go to the earliest model in input order. If any candidate has no score, the
/// whole selection is abandoned and `None` is returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostDiscriminativeSelector {
    analyzer: StatementAnalyzer,
}

impl MostDiscriminativeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores of all candidates in input order
    pub fn scores<M: ValueModel>(
        &self,
        models: &[M],
        statements: &[PreferenceStatement],
    ) -> Vec<Option<f64>> {
        #[cfg(feature = "parallel")]
        {
            models
                .par_iter()
                .map(|m| most_discriminative_with(&self.analyzer, statements, Some(m)))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            models
                .iter()
                .map(|m| most_discriminative_with(&self.analyzer, statements, Some(m)))
                .collect()
        }
    }
}

impl<M: ValueModel> RepresentativeSelector<M> for MostDiscriminativeSelector {
    fn select_index(&self, models: &[M], statements: &[PreferenceStatement]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, score) in self.scores(models, statements).into_iter().enumerate() {
            let score = score?;
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }
        best.map(|(index, _)| index)
    }
}

/// Pick the MDVF representative and return an owned copy
pub fn select_representative<M: ValueModel>(
    models: &[M],
    statements: &[PreferenceStatement],
) -> Option<M> {
    MostDiscriminativeSelector::new()
        .select(models, statements)
        .cloned()
}

/// Like [`select_representative`], but a missing representative is an error
///
/// Fails with [`DecisionError::MissingInput`] for an empty candidate list or when no
/// candidate could be scored.
pub fn require_representative<M: ValueModel>(
    models: &[M],
    statements: &[PreferenceStatement],
) -> DmResult<M> {
    if models.is_empty() {
        return Err(DecisionError::MissingInput(
            "no candidate models to select a representative from".to_string(),
        ));
    }
    select_representative(models, statements).ok_or_else(|| {
        DecisionError::MissingInput("no candidate model has a compatibility score".to_string())
    })
}

pub mod prelude {
    pub use super::{
        require_representative, select_representative, MostDiscriminativeSelector,
        RepresentativeSelector,
    };
}
