//! Confidence-weight calibration.
//!
//! High-confidence responses should earn positive feedback. When the high
//! band (≥ 0.7) disappoints, weight shifts from retrieval adequacy toward
//! answer quality. Each weight is clamped to [0.3, 0.7] independently; the
//! pair is intentionally never renormalized to sum to 1 (see
//! `ConfidenceWeights`), so repeated shifts can drift the sum.

use serde_json::json;

use attune_core::config::{ConfidenceWeights, ConfigPatch, TuningConfig};
use attune_core::constants::{
    CONFIDENCE_BAND_HIGH, CONFIDENCE_WEIGHT_MAX, CONFIDENCE_WEIGHT_MIN,
    HIGH_CONFIDENCE_TARGET_RATE, MIN_PARTITION_SAMPLES,
};
use attune_core::feedback::FeedbackEntry;
use attune_core::models::Adjustment;

use super::{positive_rate, Proposal};

pub fn propose_confidence_weights(
    feedback: &[FeedbackEntry],
    config: &TuningConfig,
) -> Option<Proposal> {
    let high_band: Vec<&FeedbackEntry> = feedback
        .iter()
        .filter(|e| e.confidence >= CONFIDENCE_BAND_HIGH)
        .collect();

    if high_band.len() < MIN_PARTITION_SAMPLES {
        return None;
    }

    let high_rate = positive_rate(&high_band);
    if high_rate >= HIGH_CONFIDENCE_TARGET_RATE {
        return None;
    }

    let current = config.confidence_weights;
    let new_weights = ConfidenceWeights {
        retrieval_eval: (current.retrieval_eval - config.learning_rate)
            .max(CONFIDENCE_WEIGHT_MIN),
        answer_quality: (current.answer_quality + config.learning_rate)
            .min(CONFIDENCE_WEIGHT_MAX),
    };

    Some(Proposal {
        patch: ConfigPatch {
            confidence_weights: Some(new_weights),
            ..Default::default()
        },
        adjustment: Adjustment {
            parameter: "confidence_weights".to_string(),
            old_value: json!({
                "retrieval_eval": current.retrieval_eval,
                "answer_quality": current.answer_quality,
            }),
            new_value: json!({
                "retrieval_eval": new_weights.retrieval_eval,
                "answer_quality": new_weights.answer_quality,
            }),
            reason: format!(
                "high-confidence responses only {:.1}% positive",
                high_rate * 100.0
            ),
            impact: Some("confidence now leans more on answer quality".to_string()),
        },
    })
}
