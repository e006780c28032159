use attune_core::config::{ConfidenceWeights, JudgeWeights};
use attune_core::feedback::JudgeScores;
use attune_retrieval::fusion::{fuse, RankedResult};
use attune_retrieval::scoring::{weighted_confidence, weighted_judge_score};
use proptest::prelude::*;

fn arb_confidence_weights() -> impl Strategy<Value = ConfidenceWeights> {
    // The calibration analysis clamps each weight to [0.3, 0.7] but never
    // renormalizes, so any pair in that box is a reachable state.
    (0.3f64..=0.7, 0.3f64..=0.7).prop_map(|(retrieval_eval, answer_quality)| {
        ConfidenceWeights {
            retrieval_eval,
            answer_quality,
        }
    })
}

fn arb_judge_weights() -> impl Strategy<Value = JudgeWeights> {
    // Arbitrary positive triple, renormalized the way the optimizer does.
    (0.01f64..1.0, 0.01f64..1.0, 0.01f64..1.0).prop_map(|(r, f, c)| {
        let total = r + f + c;
        JudgeWeights {
            relevance: r / total,
            factuality: f / total,
            completeness: c / total,
        }
    })
}

proptest! {
    #[test]
    fn confidence_bounded_for_all_inputs(
        retrieval_score in 0.0f64..=10.0,
        answer_score in 0.0f64..=10.0,
        weights in arb_confidence_weights(),
    ) {
        let confidence = weighted_confidence(retrieval_score, answer_score, &weights);
        prop_assert!((0.0..=1.0).contains(&confidence));
    }

    #[test]
    fn judge_score_bounded_for_all_inputs(
        relevance in 0.0f64..=10.0,
        factuality in 0.0f64..=10.0,
        completeness in 0.0f64..=10.0,
        weights in arb_judge_weights(),
    ) {
        let scores = JudgeScores::new(relevance, factuality, completeness);
        let overall = weighted_judge_score(&scores, &weights);
        prop_assert!((0.0..=10.0).contains(&overall));
    }

    #[test]
    fn fusion_output_is_sorted_and_covers_inputs(
        semantic_len in 0usize..30,
        keyword_len in 0usize..30,
        overlap in 0usize..15,
    ) {
        let semantic: Vec<RankedResult> = (0..semantic_len)
            .map(|i| RankedResult::new(format!("doc{i}"), 1.0))
            .collect();
        // Overlap reuses the lowest semantic ids, the rest are distinct.
        let keyword: Vec<RankedResult> = (0..keyword_len)
            .map(|i| {
                if i < overlap.min(semantic_len) {
                    RankedResult::new(format!("doc{i}"), 1.0)
                } else {
                    RankedResult::new(format!("kw{i}"), 1.0)
                }
            })
            .collect();

        let fused = fuse(&semantic, &keyword, 60);

        let distinct = semantic_len + keyword_len - overlap.min(semantic_len).min(keyword_len);
        prop_assert_eq!(fused.len(), distinct);
        for pair in fused.windows(2) {
            prop_assert!(pair[0].rrf_score >= pair[1].rrf_score);
        }
    }
}
