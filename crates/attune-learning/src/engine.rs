//! Optimizer: orchestrates the analyses and records batch performance.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use attune_core::config::{ConfigPatch, TuningConfig};
use attune_core::constants::PERFORMANCE_HISTORY_CAP;
use attune_core::feedback::FeedbackEntry;
use attune_core::models::{Adjustment, PerformanceSnapshot};
use attune_storage::ConfigStore;

use crate::analysis::{
    propose_confidence_weights, propose_judge_weights, propose_web_search_threshold, Proposal,
};

/// Why a run produced the changes it did (or none at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum RunStatus {
    Completed,
    /// Batch smaller than `min_samples`; nothing analyzed or recorded.
    InsufficientData { needed: usize },
}

/// Outcome of one optimizer run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub timestamp: DateTime<Utc>,
    /// Entries in the analyzed batch.
    pub analyzed: usize,
    /// Adjustments applied and persisted, in analysis order.
    pub changes: Vec<Adjustment>,
    /// Adjustments proposed but lost to a persistence failure.
    pub failed_changes: usize,
    pub status: RunStatus,
}

/// The control loop. Consumes a feedback batch, applies bounded adjustments
/// through the config store, and appends one performance snapshot per run.
pub struct Optimizer {
    config: Arc<ConfigStore>,
}

type Analysis = fn(&[FeedbackEntry], &TuningConfig) -> Option<Proposal>;

// Analysis order matters only for reporting; the three touch disjoint
// top-level config sections.
const ANALYSES: [Analysis; 3] = [
    propose_web_search_threshold,
    propose_confidence_weights,
    propose_judge_weights,
];

impl Optimizer {
    pub fn new(config: Arc<ConfigStore>) -> Self {
        Self { config }
    }

    /// Analyze a feedback batch and apply any proposed adjustments.
    ///
    /// Declines whole when the batch is below `min_samples`. Analyses are
    /// failure-isolated: a persistence failure applying one proposal is
    /// logged and counted, and the remaining analyses still run. Completed
    /// runs always append a performance snapshot, pruned to the most recent
    /// 50.
    pub fn run(&self, feedback: &[FeedbackEntry]) -> OptimizationReport {
        let now = Utc::now();
        let min_samples = self.config.snapshot().min_samples;

        if feedback.len() < min_samples {
            debug!(
                samples = feedback.len(),
                needed = min_samples,
                "optimizer declined: insufficient feedback"
            );
            return OptimizationReport {
                timestamp: now,
                analyzed: feedback.len(),
                changes: Vec::new(),
                failed_changes: 0,
                status: RunStatus::InsufficientData {
                    needed: min_samples,
                },
            };
        }

        let mut changes = Vec::new();
        let mut failed_changes = 0;

        for analyze in ANALYSES {
            // Re-snapshot so each analysis sees earlier applied changes.
            let current = self.config.snapshot();
            let Some(proposal) = analyze(feedback, &current) else {
                continue;
            };
            match self.config.update(proposal.patch) {
                Ok(updated) => {
                    info!(
                        parameter = %proposal.adjustment.parameter,
                        old = %proposal.adjustment.old_value,
                        new = %proposal.adjustment.new_value,
                        reason = %proposal.adjustment.reason,
                        version = updated.version,
                        "tuning parameter adjusted"
                    );
                    changes.push(proposal.adjustment);
                }
                Err(e) => {
                    warn!(
                        parameter = %proposal.adjustment.parameter,
                        error = %e,
                        "adjustment not persisted, skipping"
                    );
                    failed_changes += 1;
                }
            }
        }

        self.record_performance(feedback, now);

        info!(
            analyzed = feedback.len(),
            changes = changes.len(),
            "optimizer run complete"
        );

        OptimizationReport {
            timestamp: now,
            analyzed: feedback.len(),
            changes,
            failed_changes,
            status: RunStatus::Completed,
        }
    }

    /// Append a snapshot of the analyzed batch to the performance history.
    fn record_performance(&self, feedback: &[FeedbackEntry], now: DateTime<Utc>) {
        if feedback.is_empty() {
            return;
        }
        let total = feedback.len();
        let positive = feedback
            .iter()
            .filter(|e| e.feedback_type.is_positive())
            .count();
        let web_triggered = feedback.iter().filter(|e| e.web_search_triggered).count();
        let avg_confidence =
            feedback.iter().map(|e| e.confidence).sum::<f64>() / total as f64;

        let snapshot = PerformanceSnapshot {
            timestamp: now,
            total_feedback: total,
            positive_rate: positive as f64 / total as f64,
            avg_confidence,
            web_search_usage: web_triggered as f64 / total as f64,
        };

        let mut history = self.config.snapshot().performance_history;
        history.push(snapshot);
        if history.len() > PERFORMANCE_HISTORY_CAP {
            let drop = history.len() - PERFORMANCE_HISTORY_CAP;
            history.drain(..drop);
        }

        if let Err(e) = self.config.update(ConfigPatch {
            performance_history: Some(history),
            ..Default::default()
        }) {
            warn!(error = %e, "performance snapshot not persisted");
        }
    }
}
