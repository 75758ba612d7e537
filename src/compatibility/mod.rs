//! Compatibility analysis
//!
//! Scores how well a value model agrees with a preference statement. Positive scores
//! mean the model reproduces the statement, zero is the boundary and counts as
//! incompatible, negative scores mean the model contradicts it. `None` means the
//! statement carries no numeric signal.
//!
//! Aggregating over a statement set keeps the worst (minimum) score, which is the
//! model's margin against all available evidence.

use crate::model::traits::ValueModel;
use crate::preference::statement::{PreferenceStatement, Relation};

/// Score returned for a model checked against an empty statement set
///
/// It is positive, so unconstrained models are accepted, but smaller than any score
/// a real statement would typically yield.
pub const ALWAYS_COMPATIBLE: f64 = f64::MIN_POSITIVE;

/// Scores one statement against one model
pub trait CompatibilityAnalyzer: Send + Sync {
    fn score<M: ValueModel>(&self, statement: &PreferenceStatement, model: &M) -> Option<f64>;
}

/// Analyzer for strict preference statements
///
/// Returns how much better the model rates the preferred alternative.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreferenceAnalyzer;

impl CompatibilityAnalyzer for PreferenceAnalyzer {
    fn score<M: ValueModel>(&self, statement: &PreferenceStatement, model: &M) -> Option<f64> {
        if statement.relation() != Relation::Preference {
            return None;
        }
        let preferred = model.evaluate_alternative(statement.first());
        let other = model.evaluate_alternative(statement.second());
        Some(model.direction().margin(preferred, other))
    }
}

/// Analyzer for indifference statements
///
/// Returns minus the absolute value difference, so the best possible score is zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndifferenceAnalyzer;

impl CompatibilityAnalyzer for IndifferenceAnalyzer {
    fn score<M: ValueModel>(&self, statement: &PreferenceStatement, model: &M) -> Option<f64> {
        if statement.relation() != Relation::Indifference {
            return None;
        }
        let a = model.evaluate_alternative(statement.first());
        let b = model.evaluate_alternative(statement.second());
        Some(-(a - b).abs())
    }
}

/// Dispatches each statement to the analyzer for its relation
///
/// Incomparability statements always score `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatementAnalyzer {
    preference: PreferenceAnalyzer,
    indifference: IndifferenceAnalyzer,
}

impl StatementAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompatibilityAnalyzer for StatementAnalyzer {
    fn score<M: ValueModel>(&self, statement: &PreferenceStatement, model: &M) -> Option<f64> {
        match statement.relation() {
            Relation::Preference => self.preference.score(statement, model),
            Relation::Indifference => self.indifference.score(statement, model),
            Relation::Incomparable => None,
        }
    }
}

/// Score a single statement with the default analyzer
pub fn score<M: ValueModel>(statement: &PreferenceStatement, model: &M) -> Option<f64> {
    StatementAnalyzer::new().score(statement, model)
}

/// Worst-case compatibility of a model over a statement set
///
/// Returns `None` when the model is absent or when no statement yields a score,
/// and [`ALWAYS_COMPATIBLE`] for an empty statement set.
pub fn most_discriminative<M: ValueModel>(
    statements: &[PreferenceStatement],
    model: Option<&M>,
) -> Option<f64> {
    most_discriminative_with(&StatementAnalyzer::new(), statements, model)
}

/// [`most_discriminative`] with a custom analyzer
pub fn most_discriminative_with<A, M>(
    analyzer: &A,
    statements: &[PreferenceStatement],
    model: Option<&M>,
) -> Option<f64>
where
    A: CompatibilityAnalyzer,
    M: ValueModel,
{
    let model = model?;
    if statements.is_empty() {
        return Some(ALWAYS_COMPATIBLE);
    }
    statements
        .iter()
        .filter_map(|s| analyzer.score(s, model))
        .reduce(f64::min)
}

/// Acceptance test shared by the model constructors
///
/// A model is accepted when nothing constrains it (`None`) or its worst-case score is
/// strictly positive. A perfectly matched indifference statement scores exactly zero
/// and therefore rejects the model.
pub fn is_compatible(most_discriminative: Option<f64>) -> bool {
    most_discriminative.map_or(true, |s| s > 0.0)
}

pub mod prelude {
    pub use super::{
        is_compatible, most_discriminative, most_discriminative_with, score,
        CompatibilityAnalyzer, IndifferenceAnalyzer, PreferenceAnalyzer, StatementAnalyzer,
        ALWAYS_COMPATIBLE,
    };
}
