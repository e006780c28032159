//! # attune-service
//!
//! `TunerService` is the explicit context object the API layer holds: one
//! instance constructed at startup, passed by reference into request
//! handlers. It owns the feedback log, the config store, and the optimizer,
//! and closes the loop: submitted feedback conditionally triggers an
//! optimizer run against the whole accumulated log.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use attune_core::config::TuningConfig;
use attune_core::constants::DEFAULT_RRF_K;
use attune_core::feedback::{FeedbackEntry, NewFeedback};
use attune_core::models::PerformanceTrend;
use attune_core::{AttuneError, AttuneResult};
use attune_learning::{
    performance_trend, recommend, OptimizationReport, Optimizer, RecommendationReport,
};
use attune_retrieval::fusion::{fuse, FusedResult, RankedResult};
use attune_retrieval::scoring;
use attune_storage::{ConfigStore, FeedbackLog, FeedbackStats};

/// Current config plus derived health views, for the diagnostics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostics {
    pub config: TuningConfig,
    /// None until at least two optimizer runs have recorded snapshots.
    pub trend: Option<PerformanceTrend>,
    pub stats: FeedbackStats,
}

pub struct TunerService {
    log: FeedbackLog,
    config: Arc<ConfigStore>,
    optimizer: Optimizer,
    /// Serializes append + boundary check + optimizer run, so at most one
    /// run happens per qualifying feedback count.
    submit_gate: Mutex<()>,
}

impl TunerService {
    /// Open (or create) the service state under `data_dir`.
    pub fn open(data_dir: impl AsRef<Path>) -> AttuneResult<Self> {
        let data_dir = data_dir.as_ref();
        let config = Arc::new(ConfigStore::open(data_dir.join("tuning_config.json"))?);
        let log = FeedbackLog::open(data_dir.join("feedback.json"))?;
        let optimizer = Optimizer::new(config.clone());

        info!(data_dir = %data_dir.display(), "tuner service ready");
        Ok(Self {
            log,
            config,
            optimizer,
            submit_gate: Mutex::new(()),
        })
    }

    /// Record one feedback entry and return its id.
    ///
    /// When the log length reaches a multiple of `min_samples`, the
    /// optimizer runs over the full accumulated log before this returns.
    pub fn submit_feedback(&self, new: NewFeedback) -> AttuneResult<String> {
        let _gate = self
            .submit_gate
            .lock()
            .map_err(|_| AttuneError::LockPoisoned {
                resource: "submit gate",
            })?;

        let (feedback_id, count) = self.log.append(new)?;

        let min_samples = self.config.snapshot().min_samples.max(1);
        if count >= min_samples && count % min_samples == 0 {
            info!(samples = count, "feedback boundary reached, running optimizer");
            let report = self.optimizer.run(&self.log.load_all()?);
            debug!(
                changes = report.changes.len(),
                failed = report.failed_changes,
                "optimizer finished"
            );
        }

        Ok(feedback_id)
    }

    /// Run the optimizer immediately over the full log, regardless of the
    /// batch boundary. The `min_samples` floor still applies.
    pub fn optimize_now(&self) -> AttuneResult<OptimizationReport> {
        let _gate = self
            .submit_gate
            .lock()
            .map_err(|_| AttuneError::LockPoisoned {
                resource: "submit gate",
            })?;
        Ok(self.optimizer.run(&self.log.load_all()?))
    }

    pub fn diagnostics(&self) -> AttuneResult<Diagnostics> {
        let config = self.config.snapshot();
        let trend = performance_trend(&config.performance_history);
        Ok(Diagnostics {
            trend,
            stats: self.log.stats()?,
            config,
        })
    }

    /// Blend the two 0–10 judge scores into a 0–1 confidence using the
    /// current learned weights.
    pub fn compute_confidence(&self, retrieval_score: f64, answer_score: f64) -> f64 {
        let config = self.config.snapshot();
        scoring::weighted_confidence(retrieval_score, answer_score, &config.confidence_weights)
    }

    /// Whether a response should fall back to web search. Honors the
    /// `web_search.enabled` master switch.
    pub fn should_trigger_web_search(&self, confidence: f64, judge_score: f64) -> bool {
        let config = self.config.snapshot();
        config.web_search.enabled
            && scoring::should_trigger_web_search(confidence, judge_score, &config.web_search)
    }

    /// Merge the semantic and keyword rankings with the default RRF k.
    pub fn fuse_rankings(
        &self,
        semantic: &[RankedResult],
        keyword: &[RankedResult],
    ) -> Vec<FusedResult> {
        fuse(semantic, keyword, DEFAULT_RRF_K)
    }

    pub fn feedback_stats(&self) -> AttuneResult<FeedbackStats> {
        self.log.stats()
    }

    /// Advisory tuning suggestions from the current stats. Read-only: the
    /// config is never touched; acting on a suggestion is the operator's
    /// call.
    pub fn recommendations(&self) -> AttuneResult<RecommendationReport> {
        Ok(recommend(&self.log.stats()?))
    }

    /// Recent negatively rated responses, newest first.
    pub fn recent_negative(&self, limit: usize) -> AttuneResult<Vec<FeedbackEntry>> {
        self.log.recent_negative(limit)
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }
}
