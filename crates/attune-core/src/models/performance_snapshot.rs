use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Batch-level outcome recorded after every optimizer run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    pub timestamp: DateTime<Utc>,
    /// Size of the feedback batch the run analyzed.
    pub total_feedback: usize,
    /// Fraction of the batch marked positive, 0–1.
    pub positive_rate: f64,
    /// Mean system confidence across the batch, 0–1.
    pub avg_confidence: f64,
    /// Fraction of the batch that fell back to web search, 0–1.
    pub web_search_usage: f64,
}
