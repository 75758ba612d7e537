//! End-to-end decision session
//!
//! Records statements, builds models with both constructors, picks a representative,
//! repairs a contradiction and persists the history.

use fugue_pref::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn alternatives() -> (Alternative, Alternative) {
    (
        Alternative::new(0, vec![0.2, 0.6]),
        Alternative::new(1, vec![0.6, 0.2]),
    )
}

fn context(seed: u64) -> DecisionContext<StdRng> {
    DecisionContext::new(Criteria::costs(2), StdRng::seed_from_u64(seed))
}

#[test]
fn frs_session_with_repair() {
    let mut ctx = context(42);
    let (a, b) = alternatives();
    let mut history = History::new();
    history
        .record(PreferenceStatement::preference(a.clone(), b.clone()))
        .unwrap();

    let mut frs: Frs<LNorm, RandomLNorm> = FrsBuilder::new()
        .feasible_samples(25)
        .sampling_limit(5_000)
        .generator(RandomLNorm::chebyshev())
        .build()
        .unwrap();

    let bundle = frs.construct(&history.snapshot(), &mut ctx).unwrap();
    assert!(bundle.is_consistent());
    assert_eq!(bundle.len(), 25);

    let statements = history.snapshot();
    let representative = select_representative(&bundle.models, &statements).unwrap();
    let best = most_discriminative(&statements, Some(&representative)).unwrap();
    assert!(best > 0.0);
    for model in &bundle.models {
        assert!(most_discriminative(&statements, Some(model)).unwrap() <= best);
    }

    // the decision maker changes their mind
    history
        .record(PreferenceStatement::preference(b.clone(), a.clone()))
        .unwrap();
    let bundle = frs.construct(&history.snapshot(), &mut ctx).unwrap();
    assert!(bundle.inconsistent);
    assert_eq!(bundle.stats.preserved, 0);
    assert_eq!(bundle.stats.discarded, 25);

    let report = RemoveOldest::new()
        .with_trace(true)
        .reintroduce_consistency(bundle, &mut frs, &mut history, &mut ctx)
        .unwrap();
    assert_eq!(report.removed.len(), 1);
    assert_eq!(report.removed[0].statement.first().id(), a.id());
    assert_eq!(report.consistent_state.remaining.len(), 1);
    assert_eq!(report.consistent_state.models.len(), 25);
    assert_eq!(report.trace.as_ref().map(Vec::len), Some(1));

    let statements = history.snapshot();
    for model in &report.consistent_state.models {
        assert!(is_compatible(most_discriminative(&statements, Some(model))));
        assert!(model.evaluate_alternative(&b) < model.evaluate_alternative(&a));
    }
}

#[test]
fn ers_session_with_rescaling() {
    let mut ctx = context(7);
    let (a, b) = alternatives();
    let mut history = History::new();
    history
        .record(PreferenceStatement::preference(a.clone(), b.clone()))
        .unwrap();

    let mut ers: Ers<LinearUtility, _, _> = ErsBuilder::new()
        .population_size(20)
        .initial_sampling_limit(2_000)
        .offspring_count(50)
        .generator(RandomLinearUtility::new())
        .offspring(WeightsCrossover::default())
        .build()
        .unwrap();

    let bundle = ers.construct(&history.snapshot(), &mut ctx).unwrap();
    assert!(bundle.is_consistent());
    assert_eq!(bundle.len(), 20);
    for model in &bundle.models {
        assert!(model.weights()[0] > model.weights()[1]);
    }
    let fitness: Vec<f64> = ers.queue().iter().map(|e| e.fitness).collect();
    assert!(fitness.windows(2).all(|w| w[0] >= w[1]));

    // rescaling keeps the ordering of alternatives, so nothing is discarded
    let rescaled = ctx
        .criteria()
        .normalizations_from_ranges(&[(0.0, 2.0), (0.0, 2.0)]);
    ctx.update_normalizations(rescaled.clone()).unwrap();
    let bundle = ers.construct(&history.snapshot(), &mut ctx).unwrap();
    assert!(!ctx.normalizations_changed());
    assert_eq!(bundle.stats.discarded, 0);
    assert_eq!(bundle.stats.preserved, 20);
    for model in &bundle.models {
        assert_eq!(model.normalizations(), rescaled.as_slice());
    }

    let representative = require_representative(&bundle.models, &history.snapshot()).unwrap();
    assert!(representative.evaluate_alternative(&a) > representative.evaluate_alternative(&b));
}

#[test]
fn history_survives_serialization() {
    let (a, b) = alternatives();
    let mut history = History::new();
    history
        .record(PreferenceStatement::preference(a.clone(), b.clone()))
        .unwrap();
    history
        .record(PreferenceStatement::indifference(b.clone(), a.clone()))
        .unwrap();
    history.remove_oldest();

    let json = serde_json::to_string(&history).unwrap();
    let restored: History = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.entries(), history.entries());
    assert_eq!(restored.next_iteration(), 2);
    assert_eq!(restored.oldest().map(|e| e.iteration), Some(1));
}

#[test]
fn stats_serialize() {
    let stats = ConstructionStats {
        accepted: 3,
        rejected: 1,
        preserved: 2,
        discarded: 0,
        elapsed_ms: 1.5,
    };
    let json = serde_json::to_string(&stats).unwrap();
    let restored: ConstructionStats = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, stats);
    assert_eq!(restored.acceptance_rate(), Some(0.75));
}
