//! Property tests: numerical invariants hold under arbitrary feedback.

use std::sync::Arc;

use attune_core::feedback::{FeedbackEntry, FeedbackType, JudgeScores};
use attune_learning::Optimizer;
use attune_storage::ConfigStore;
use proptest::prelude::*;
use test_fixtures::scored_entry;

#[derive(Debug, Clone)]
struct RawEntry {
    positive: bool,
    web: bool,
    confidence: f64,
    relevance: f64,
    factuality: f64,
    completeness: f64,
}

fn arb_entry() -> impl Strategy<Value = RawEntry> {
    (
        any::<bool>(),
        any::<bool>(),
        0.0f64..=1.0,
        0.0f64..=10.0,
        0.0f64..=10.0,
        0.0f64..=10.0,
    )
        .prop_map(
            |(positive, web, confidence, relevance, factuality, completeness)| RawEntry {
                positive,
                web,
                confidence,
                relevance,
                factuality,
                completeness,
            },
        )
}

fn materialize(raw: &[RawEntry]) -> Vec<FeedbackEntry> {
    raw.iter()
        .enumerate()
        .map(|(i, r)| {
            scored_entry(
                i + 1,
                if r.positive {
                    FeedbackType::Positive
                } else {
                    FeedbackType::Negative
                },
                r.web,
                r.confidence,
                JudgeScores::new(r.relevance, r.factuality, r.completeness),
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_after_arbitrary_runs(
        batches in prop::collection::vec(
            prop::collection::vec(arb_entry(), 0..25),
            1..6,
        ),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(ConfigStore::open(dir.path().join("tuning.json")).unwrap());
        let optimizer = Optimizer::new(store.clone());

        let mut last_version = store.snapshot().version;
        for batch in &batches {
            optimizer.run(&materialize(batch));

            let config = store.snapshot();
            // Threshold stays within its bounds no matter the input.
            prop_assert!(config.web_search.confidence_threshold >= 0.5);
            prop_assert!(config.web_search.confidence_threshold <= 0.9);
            // Confidence weights stay within their clamp box.
            prop_assert!(config.confidence_weights.retrieval_eval >= 0.3 - 1e-12);
            prop_assert!(config.confidence_weights.retrieval_eval <= 0.7 + 1e-12);
            prop_assert!(config.confidence_weights.answer_quality >= 0.3 - 1e-12);
            prop_assert!(config.confidence_weights.answer_quality <= 0.7 + 1e-12);
            // Judge weights remain a distribution.
            prop_assert!((config.judge_weights.sum() - 1.0).abs() < 1e-9);
            prop_assert!(config.judge_weights.relevance >= 0.0);
            prop_assert!(config.judge_weights.factuality >= 0.0);
            prop_assert!(config.judge_weights.completeness >= 0.0);
            // Version never moves backwards.
            prop_assert!(config.version >= last_version);
            last_version = config.version;
            // History never exceeds its cap.
            prop_assert!(config.performance_history.len() <= 50);
        }
    }
}
