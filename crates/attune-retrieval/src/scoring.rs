//! Confidence and judge-score blending using learned weights.

use attune_core::config::{ConfidenceWeights, JudgeWeights, WebSearchConfig};
use attune_core::feedback::JudgeScores;

/// Blend retrieval adequacy and answer quality (both 0–10) into a 0–1
/// confidence using the current learned weights.
///
/// The weights are not guaranteed to sum to 1 (see `ConfidenceWeights`), so
/// the result is clamped rather than assumed bounded.
pub fn weighted_confidence(
    retrieval_score: f64,
    answer_score: f64,
    weights: &ConfidenceWeights,
) -> f64 {
    let confidence = weights.retrieval_eval * (retrieval_score / 10.0)
        + weights.answer_quality * (answer_score / 10.0);
    confidence.clamp(0.0, 1.0)
}

/// Weighted overall judge score on the 0–10 scale.
pub fn weighted_judge_score(scores: &JudgeScores, weights: &JudgeWeights) -> f64 {
    let weighted = weights.relevance * scores.relevance
        + weights.factuality * scores.factuality
        + weights.completeness * scores.completeness;
    weighted.clamp(0.0, 10.0)
}

/// Whether the response should fall back to web search.
///
/// A logical OR of two independently sourced signals: low blended confidence
/// or a low raw retrieval judge score. Either alone forces the trigger. The
/// `enabled` master switch is the caller's concern.
pub fn should_trigger_web_search(
    confidence: f64,
    judge_score: f64,
    config: &WebSearchConfig,
) -> bool {
    confidence < config.confidence_threshold || judge_score < config.judge_threshold
}
