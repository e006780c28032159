use serde::{Deserialize, Serialize};

use crate::constants;

/// Blend weights for the final 0–1 confidence value.
///
/// Each weight is independently clamped to [0.3, 0.7] during calibration and
/// the pair is deliberately never renormalized to sum to 1, so repeated
/// adjustments can drift the sum away from 1.0. Downstream consumers must not
/// assume the weights are a convex combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceWeights {
    /// Weight on retrieval adequacy. Default: 0.5.
    pub retrieval_eval: f64,
    /// Weight on answer quality. Default: 0.5.
    pub answer_quality: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            retrieval_eval: constants::DEFAULT_RETRIEVAL_WEIGHT,
            answer_quality: constants::DEFAULT_ANSWER_WEIGHT,
        }
    }
}

/// Per-axis weights for the overall judge score. Always sum to 1.0; the
/// optimizer renormalizes after every adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeWeights {
    /// Default: 0.4.
    pub relevance: f64,
    /// Default: 0.4.
    pub factuality: f64,
    /// Default: 0.2.
    pub completeness: f64,
}

impl Default for JudgeWeights {
    fn default() -> Self {
        Self {
            relevance: constants::DEFAULT_RELEVANCE_WEIGHT,
            factuality: constants::DEFAULT_FACTUALITY_WEIGHT,
            completeness: constants::DEFAULT_COMPLETENESS_WEIGHT,
        }
    }
}

impl JudgeWeights {
    pub fn sum(&self) -> f64 {
        self.relevance + self.factuality + self.completeness
    }
}
