use serde::{Deserialize, Serialize};

use crate::constants;

/// Reranking parameters consumed by the cross-encoder layer.
///
/// Persisted alongside the learned parameters so the whole tuning state
/// round-trips through one document; the optimizer leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankingConfig {
    /// Documents scoring below this rerank score are dropped. Default: -12.0.
    pub min_score_threshold: f64,
    /// Number of documents handed to generation. Default: 5.
    pub top_k: usize,
}

impl Default for RerankingConfig {
    fn default() -> Self {
        Self {
            min_score_threshold: constants::DEFAULT_RERANK_MIN_SCORE,
            top_k: constants::DEFAULT_RERANK_TOP_K,
        }
    }
}
