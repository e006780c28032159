use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::models::PerformanceSnapshot;

use super::{ConfidenceWeights, JudgeWeights, RerankingConfig, WebSearchConfig};

/// The full mutable, versioned tuning configuration.
///
/// Mutated only through `ConfigStore::update`, which replaces whole top-level
/// sections, bumps `version`, refreshes `last_updated`, and persists the
/// entire document. Unknown or missing fields in a persisted file fall back
/// to defaults via `serde(default)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Monotone counter, advanced by every persisted update.
    pub version: u64,
    pub last_updated: DateTime<Utc>,
    pub web_search: WebSearchConfig,
    pub confidence_weights: ConfidenceWeights,
    pub judge_weights: JudgeWeights,
    pub reranking: RerankingConfig,
    /// How aggressively the optimizer moves a parameter, in (0, 1).
    pub learning_rate: f64,
    /// Feedback entries required between optimizer runs. At least 1.
    pub min_samples: usize,
    /// Rolling record of batch-level outcomes, capped at the 50 most recent.
    pub performance_history: Vec<PerformanceSnapshot>,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            version: 1,
            last_updated: Utc::now(),
            web_search: WebSearchConfig::default(),
            confidence_weights: ConfidenceWeights::default(),
            judge_weights: JudgeWeights::default(),
            reranking: RerankingConfig::default(),
            learning_rate: constants::DEFAULT_LEARNING_RATE,
            min_samples: constants::DEFAULT_MIN_SAMPLES,
            performance_history: Vec::new(),
        }
    }
}

/// A shallow update: every `Some` field replaces the entire top-level value.
///
/// Callers must supply complete nested sections — patching
/// `web_search.confidence_threshold` alone means reading the current
/// `WebSearchConfig`, changing one field, and passing the whole section.
/// This mirrors the persisted document's update semantics and is
/// deliberately not a deep merge.
#[derive(Debug, Clone, Default)]
pub struct ConfigPatch {
    pub web_search: Option<WebSearchConfig>,
    pub confidence_weights: Option<ConfidenceWeights>,
    pub judge_weights: Option<JudgeWeights>,
    pub reranking: Option<RerankingConfig>,
    pub learning_rate: Option<f64>,
    pub min_samples: Option<usize>,
    pub performance_history: Option<Vec<PerformanceSnapshot>>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self.web_search.is_none()
            && self.confidence_weights.is_none()
            && self.judge_weights.is_none()
            && self.reranking.is_none()
            && self.learning_rate.is_none()
            && self.min_samples.is_none()
            && self.performance_history.is_none()
    }
}

impl TuningConfig {
    /// Apply a shallow patch in place. Does not touch `version` or
    /// `last_updated`; the config store owns those.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(web_search) = patch.web_search {
            self.web_search = web_search;
        }
        if let Some(confidence_weights) = patch.confidence_weights {
            self.confidence_weights = confidence_weights;
        }
        if let Some(judge_weights) = patch.judge_weights {
            self.judge_weights = judge_weights;
        }
        if let Some(reranking) = patch.reranking {
            self.reranking = reranking;
        }
        if let Some(learning_rate) = patch.learning_rate {
            self.learning_rate = learning_rate;
        }
        if let Some(min_samples) = patch.min_samples {
            // At least 1: a zero would make the run-every-N-samples boundary
            // degenerate.
            self.min_samples = min_samples.max(1);
        }
        if let Some(performance_history) = patch.performance_history {
            self.performance_history = performance_history;
        }
    }
}
