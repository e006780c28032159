use serde::{Deserialize, Serialize};

use crate::constants;

/// Web-search fallback gating.
///
/// A response falls back to web search when its confidence lands below
/// `confidence_threshold` or the retrieval-adequacy judge score lands below
/// `judge_threshold` (logical OR; either signal alone triggers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSearchConfig {
    /// Trigger web search when confidence < this. Learned, kept in [0.5, 0.9].
    pub confidence_threshold: f64,
    /// Trigger web search when the retrieval judge score < this (0–10 scale).
    pub judge_threshold: f64,
    /// Master switch for the fallback, honored by the caller.
    pub enabled: bool,
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: constants::DEFAULT_CONFIDENCE_THRESHOLD,
            judge_threshold: constants::DEFAULT_JUDGE_THRESHOLD,
            enabled: constants::DEFAULT_WEB_SEARCH_ENABLED,
        }
    }
}
