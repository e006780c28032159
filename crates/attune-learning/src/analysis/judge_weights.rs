//! Judge-weight correlation adaptation.
//!
//! Uses separation of means as a cheap correlation proxy: for each judge
//! axis, the average score on positively rated responses minus the average
//! on negatively rated ones. Axes that separate the two groups strongly earn
//! more weight. The blend is conservative (half the learning rate) and only
//! applies when the largest per-axis change exceeds 0.05, to avoid thrashing
//! on noise.

use serde_json::json;

use attune_core::config::{ConfigPatch, JudgeWeights, TuningConfig};
use attune_core::constants::{JUDGE_WEIGHT_CHANGE_EPSILON, MIN_JUDGE_SAMPLES};
use attune_core::feedback::FeedbackEntry;
use attune_core::models::Adjustment;

use super::Proposal;

/// Per-axis separation of means across positive vs negative feedback.
#[derive(Debug, Clone, Copy)]
struct Separation {
    relevance: f64,
    factuality: f64,
    completeness: f64,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn separation(feedback: &[FeedbackEntry]) -> Option<Separation> {
    let mut positive: Vec<&FeedbackEntry> = Vec::new();
    let mut negative: Vec<&FeedbackEntry> = Vec::new();
    for entry in feedback {
        if entry.feedback_type.is_positive() {
            positive.push(entry);
        } else {
            negative.push(entry);
        }
    }
    // Both groups must exist for the difference of means to mean anything.
    if positive.is_empty() || negative.is_empty() {
        return None;
    }

    let axis = |pick: fn(&FeedbackEntry) -> f64| {
        let pos: Vec<f64> = positive.iter().map(|e| pick(e)).collect();
        let neg: Vec<f64> = negative.iter().map(|e| pick(e)).collect();
        mean(&pos) - mean(&neg)
    };

    Some(Separation {
        relevance: axis(|e| e.judge_scores.relevance),
        factuality: axis(|e| e.judge_scores.factuality),
        completeness: axis(|e| e.judge_scores.completeness),
    })
}

pub fn propose_judge_weights(
    feedback: &[FeedbackEntry],
    config: &TuningConfig,
) -> Option<Proposal> {
    if feedback.len() < MIN_JUDGE_SAMPLES {
        return None;
    }

    let separation = separation(feedback)?;
    let total = separation.relevance.abs()
        + separation.factuality.abs()
        + separation.completeness.abs();
    if total <= 0.0 {
        return None;
    }

    // Target distribution: |separation| normalized to sum 1.
    let target = JudgeWeights {
        relevance: separation.relevance.abs() / total,
        factuality: separation.factuality.abs() / total,
        completeness: separation.completeness.abs() / total,
    };

    // Conservative blend at half the learning rate.
    let rate = config.learning_rate * 0.5;
    let current = config.judge_weights;
    let blended = JudgeWeights {
        relevance: current.relevance * (1.0 - rate) + target.relevance * rate,
        factuality: current.factuality * (1.0 - rate) + target.factuality * rate,
        completeness: current.completeness * (1.0 - rate) + target.completeness * rate,
    };

    // Renormalize so the three always sum to exactly 1. A hand-edited config
    // can carry all-zero weights; refuse to divide by a vanishing sum.
    let sum = blended.sum();
    if !(sum > 0.0) {
        return None;
    }
    let new_weights = JudgeWeights {
        relevance: blended.relevance / sum,
        factuality: blended.factuality / sum,
        completeness: blended.completeness / sum,
    };

    let max_change = (new_weights.relevance - current.relevance)
        .abs()
        .max((new_weights.factuality - current.factuality).abs())
        .max((new_weights.completeness - current.completeness).abs());
    if max_change <= JUDGE_WEIGHT_CHANGE_EPSILON {
        return None;
    }

    let dominant = if separation.relevance.abs() >= separation.factuality.abs()
        && separation.relevance.abs() >= separation.completeness.abs()
    {
        "relevance"
    } else if separation.factuality.abs() >= separation.completeness.abs() {
        "factuality"
    } else {
        "completeness"
    };

    Some(Proposal {
        patch: ConfigPatch {
            judge_weights: Some(new_weights),
            ..Default::default()
        },
        adjustment: Adjustment {
            parameter: "judge_weights".to_string(),
            old_value: json!({
                "relevance": current.relevance,
                "factuality": current.factuality,
                "completeness": current.completeness,
            }),
            new_value: json!({
                "relevance": new_weights.relevance,
                "factuality": new_weights.factuality,
                "completeness": new_weights.completeness,
            }),
            reason: "judge axes re-weighted by feedback separation".to_string(),
            impact: Some(format!("{dominant} separates user satisfaction most")),
        },
    })
}
