//! Web-search threshold adaptation.
//!
//! Compares positive rates of web-routed vs internally-answered responses.
//! A gap beyond 0.15 moves the confidence threshold toward the better
//! route, scaled by the learning rate and clamped to [0.5, 0.9].

use serde_json::json;

use attune_core::config::{ConfigPatch, TuningConfig};
use attune_core::constants::{
    CONFIDENCE_THRESHOLD_MAX, CONFIDENCE_THRESHOLD_MIN, MIN_PARTITION_SAMPLES,
    SIGNIFICANT_RATE_GAP,
};
use attune_core::feedback::FeedbackEntry;
use attune_core::models::Adjustment;

use super::{positive_rate, Proposal};

pub fn propose_web_search_threshold(
    feedback: &[FeedbackEntry],
    config: &TuningConfig,
) -> Option<Proposal> {
    let web: Vec<&FeedbackEntry> = feedback.iter().filter(|e| e.web_search_triggered).collect();
    let internal: Vec<&FeedbackEntry> =
        feedback.iter().filter(|e| !e.web_search_triggered).collect();

    if web.len() < MIN_PARTITION_SAMPLES || internal.len() < MIN_PARTITION_SAMPLES {
        return None;
    }

    let web_rate = positive_rate(&web);
    let internal_rate = positive_rate(&internal);
    let current = config.web_search.confidence_threshold;

    let (new_threshold, reason) = if web_rate > internal_rate + SIGNIFICANT_RATE_GAP {
        // Web search is winning: lower the threshold so it triggers more.
        let delta = (web_rate - internal_rate) * config.learning_rate;
        (
            (current - delta).max(CONFIDENCE_THRESHOLD_MIN),
            format!(
                "web search outperforming ({:.1}% vs {:.1}%)",
                web_rate * 100.0,
                internal_rate * 100.0
            ),
        )
    } else if internal_rate > web_rate + SIGNIFICANT_RATE_GAP {
        // Internal answers are winning: raise the threshold, trust them more.
        let delta = (internal_rate - web_rate) * config.learning_rate;
        (
            (current + delta).min(CONFIDENCE_THRESHOLD_MAX),
            format!(
                "internal retrieval outperforming ({:.1}% vs {:.1}%)",
                internal_rate * 100.0,
                web_rate * 100.0
            ),
        )
    } else {
        return None;
    };

    let new_threshold =
        new_threshold.clamp(CONFIDENCE_THRESHOLD_MIN, CONFIDENCE_THRESHOLD_MAX);

    // Shallow replace: carry the untouched fields of the section along.
    let mut web_search = config.web_search.clone();
    web_search.confidence_threshold = new_threshold;

    Some(Proposal {
        patch: ConfigPatch {
            web_search: Some(web_search),
            ..Default::default()
        },
        adjustment: Adjustment {
            parameter: "web_search.confidence_threshold".to_string(),
            old_value: json!(current),
            new_value: json!(new_threshold),
            reason,
            impact: Some(if new_threshold < current {
                "web search will trigger more often".to_string()
            } else {
                "web search will trigger less often".to_string()
            }),
        },
    })
}
