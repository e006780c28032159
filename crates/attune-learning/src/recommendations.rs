//! Advisory tuning recommendations derived from aggregate feedback stats.
//!
//! Unlike the optimizer analyses these never mutate the config: they read
//! the same route and confidence-band signals and surface them as
//! suggestions for an operator to act on. Thresholds here are intentionally
//! looser than the optimizer's, so a recommendation can appear before the
//! automatic loop considers the evidence strong enough to move anything.

use serde::{Deserialize, Serialize};
use tracing::debug;

use attune_core::constants::{
    BAND_RECOMMENDATION_FLOOR, HIGH_CONFIDENCE_TARGET_RATE, MIN_RECOMMENDATION_SAMPLES,
    RECOMMENDATION_RATE_GAP, RECOMMENDED_THRESHOLD_DECREASED, RECOMMENDED_THRESHOLD_INCREASED,
    ROUTE_RECOMMENDATION_FLOOR,
};
use attune_storage::FeedbackStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    Decrease,
    Increase,
    Recalibrate,
}

/// One suggested adjustment, with the evidence that earned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Dotted name of the parameter, e.g. `web_search.confidence_threshold`.
    pub parameter: String,
    pub action: RecommendedAction,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_value: Option<f64>,
}

/// Outcome of a recommendation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum RecommendationReport {
    /// Too little feedback for any of the signals to mean anything.
    InsufficientData { needed: usize, current: usize },
    Ready {
        total_feedback: usize,
        recommendations: Vec<Recommendation>,
    },
}

/// Derive recommendations from the current aggregate stats.
///
/// Needs at least 10 feedback entries. A route positive-rate gap beyond 0.2
/// (with more than 5 entries per route) suggests moving the web-search
/// threshold toward the better route; a high-confidence band below the 0.6
/// target rate suggests recalibrating the confidence weights.
pub fn recommend(stats: &FeedbackStats) -> RecommendationReport {
    if stats.total < MIN_RECOMMENDATION_SAMPLES {
        return RecommendationReport::InsufficientData {
            needed: MIN_RECOMMENDATION_SAMPLES,
            current: stats.total,
        };
    }

    let mut recommendations = Vec::new();

    let web = stats.web_search;
    let internal = stats.internal;
    if web.total > ROUTE_RECOMMENDATION_FLOOR && internal.total > ROUTE_RECOMMENDATION_FLOOR {
        if web.positive_rate > internal.positive_rate + RECOMMENDATION_RATE_GAP {
            recommendations.push(Recommendation {
                parameter: "web_search.confidence_threshold".to_string(),
                action: RecommendedAction::Decrease,
                reason: format!(
                    "web search at {:.1}% positive vs {:.1}% for internal retrieval",
                    web.positive_rate * 100.0,
                    internal.positive_rate * 100.0
                ),
                suggested_value: Some(RECOMMENDED_THRESHOLD_DECREASED),
            });
        } else if internal.positive_rate > web.positive_rate + RECOMMENDATION_RATE_GAP {
            recommendations.push(Recommendation {
                parameter: "web_search.confidence_threshold".to_string(),
                action: RecommendedAction::Increase,
                reason: format!(
                    "internal retrieval at {:.1}% positive vs {:.1}% for web search",
                    internal.positive_rate * 100.0,
                    web.positive_rate * 100.0
                ),
                suggested_value: Some(RECOMMENDED_THRESHOLD_INCREASED),
            });
        }
    }

    let high = stats.bands.high;
    if high.total > BAND_RECOMMENDATION_FLOOR
        && high.positive_rate < HIGH_CONFIDENCE_TARGET_RATE
    {
        recommendations.push(Recommendation {
            parameter: "confidence_weights".to_string(),
            action: RecommendedAction::Recalibrate,
            reason: format!(
                "high-confidence responses only {:.1}% positive",
                high.positive_rate * 100.0
            ),
            suggested_value: None,
        });
    }

    debug!(
        total = stats.total,
        count = recommendations.len(),
        "recommendations computed"
    );
    RecommendationReport::Ready {
        total_feedback: stats.total,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attune_core::feedback::FeedbackEntry;
    use attune_core::feedback::FeedbackType::{Negative as N, Positive as P};
    use test_fixtures::entry;

    fn stats_for(entries: &[FeedbackEntry]) -> FeedbackStats {
        FeedbackStats::compute(entries)
    }

    fn ready(report: RecommendationReport) -> Vec<Recommendation> {
        match report {
            RecommendationReport::Ready {
                recommendations, ..
            } => recommendations,
            other => panic!("expected ready report, got {other:?}"),
        }
    }

    #[test]
    fn fewer_than_ten_entries_is_insufficient() {
        let entries: Vec<FeedbackEntry> =
            (0..9).map(|i| entry(i + 1, P, false, 0.5)).collect();
        let report = recommend(&stats_for(&entries));
        assert_eq!(
            report,
            RecommendationReport::InsufficientData {
                needed: 10,
                current: 9,
            }
        );
    }

    #[test]
    fn web_outperforming_suggests_decrease() {
        let mut entries = Vec::new();
        for i in 0..6 {
            entries.push(entry(i + 1, P, true, 0.55));
        }
        for i in 6..12 {
            entries.push(entry(i + 1, N, false, 0.55));
        }

        let recommendations = ready(recommend(&stats_for(&entries)));
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].action, RecommendedAction::Decrease);
        assert_eq!(recommendations[0].suggested_value, Some(0.6));
        assert_eq!(
            recommendations[0].parameter,
            "web_search.confidence_threshold"
        );
    }

    #[test]
    fn internal_outperforming_suggests_increase() {
        let mut entries = Vec::new();
        for i in 0..6 {
            entries.push(entry(i + 1, N, true, 0.55));
        }
        for i in 6..12 {
            entries.push(entry(i + 1, P, false, 0.55));
        }

        let recommendations = ready(recommend(&stats_for(&entries)));
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].action, RecommendedAction::Increase);
        assert_eq!(recommendations[0].suggested_value, Some(0.9));
    }

    #[test]
    fn small_routes_suggest_nothing() {
        // Five per route: the floor is strict, both must exceed it.
        let mut entries = Vec::new();
        for i in 0..5 {
            entries.push(entry(i + 1, P, true, 0.55));
        }
        for i in 5..10 {
            entries.push(entry(i + 1, N, false, 0.55));
        }
        assert!(ready(recommend(&stats_for(&entries))).is_empty());
    }

    #[test]
    fn unreliable_high_band_suggests_recalibration() {
        let mut entries = Vec::new();
        for i in 0..4 {
            entries.push(entry(i + 1, N, false, 0.85));
        }
        for i in 4..10 {
            entries.push(entry(i + 1, P, false, 0.5));
        }

        let recommendations = ready(recommend(&stats_for(&entries)));
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].action, RecommendedAction::Recalibrate);
        assert_eq!(recommendations[0].parameter, "confidence_weights");
        assert!(recommendations[0].suggested_value.is_none());
    }

    #[test]
    fn healthy_stats_produce_no_recommendations() {
        let mut entries = Vec::new();
        for i in 0..6 {
            entries.push(entry(i + 1, P, true, 0.8));
        }
        for i in 6..12 {
            entries.push(entry(i + 1, P, false, 0.8));
        }
        let report = recommend(&stats_for(&entries));
        assert_eq!(
            report,
            RecommendationReport::Ready {
                total_feedback: 12,
                recommendations: vec![],
            }
        );
    }
}
