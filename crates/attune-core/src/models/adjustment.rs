use serde::{Deserialize, Serialize};

/// One parameter change made (or attempted) by an optimizer analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adjustment {
    /// Dotted name of the parameter, e.g. `web_search.confidence_threshold`.
    pub parameter: String,
    pub old_value: serde_json::Value,
    pub new_value: serde_json::Value,
    /// Human-readable evidence for the change.
    pub reason: String,
    /// What the change means operationally, when worth stating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}
