//! Pure analysis functions: each inspects a feedback batch against the
//! current config and proposes at most one bounded adjustment. Application
//! and persistence belong to the engine, so a failing apply cannot stop the
//! remaining analyses.

mod calibration;
mod judge_weights;
mod web_search;

pub use calibration::propose_confidence_weights;
pub use judge_weights::propose_judge_weights;
pub use web_search::propose_web_search_threshold;

use attune_core::config::ConfigPatch;
use attune_core::feedback::FeedbackEntry;
use attune_core::models::Adjustment;

/// A proposed config change: the shallow patch to apply plus the audit
/// record describing it.
#[derive(Debug, Clone)]
pub struct Proposal {
    pub patch: ConfigPatch,
    pub adjustment: Adjustment,
}

/// Fraction of entries marked positive; 0 for an empty slice.
pub(crate) fn positive_rate(entries: &[&FeedbackEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let positive = entries
        .iter()
        .filter(|e| e.feedback_type.is_positive())
        .count();
    positive as f64 / entries.len() as f64
}
