//! Aggregate feedback statistics: totals, the web-vs-internal route
//! breakdown, and the confidence-band breakdown.

use serde::{Deserialize, Serialize};

use attune_core::constants::{CONFIDENCE_BAND_HIGH, CONFIDENCE_BAND_LOW};
use attune_core::feedback::FeedbackEntry;

/// Count and positive rate of one partition. Rate is 0 when empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteStats {
    pub total: usize,
    pub positive: usize,
    pub positive_rate: f64,
}

impl RouteStats {
    fn compute<'a>(entries: impl Iterator<Item = &'a FeedbackEntry>) -> Self {
        let mut total = 0;
        let mut positive = 0;
        for entry in entries {
            total += 1;
            if entry.feedback_type.is_positive() {
                positive += 1;
            }
        }
        Self {
            total,
            positive,
            positive_rate: if total > 0 {
                positive as f64 / total as f64
            } else {
                0.0
            },
        }
    }
}

/// Same shape as `RouteStats`, partitioned by confidence band.
pub type BandStats = RouteStats;

/// Positive rates across the three confidence bands:
/// low `[0, 0.3)`, medium `[0.3, 0.7)`, high `[0.7, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBands {
    pub low: BandStats,
    pub medium: BandStats,
    pub high: BandStats,
}

/// Full aggregate view over the feedback log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub positive_rate: f64,
    pub web_search: RouteStats,
    pub internal: RouteStats,
    pub bands: ConfidenceBands,
}

impl FeedbackStats {
    pub fn compute(entries: &[FeedbackEntry]) -> Self {
        let overall = RouteStats::compute(entries.iter());

        let web_search = RouteStats::compute(entries.iter().filter(|e| e.web_search_triggered));
        let internal = RouteStats::compute(entries.iter().filter(|e| !e.web_search_triggered));

        let bands = ConfidenceBands {
            low: RouteStats::compute(entries.iter().filter(|e| e.confidence < CONFIDENCE_BAND_LOW)),
            medium: RouteStats::compute(entries.iter().filter(|e| {
                e.confidence >= CONFIDENCE_BAND_LOW && e.confidence < CONFIDENCE_BAND_HIGH
            })),
            high: RouteStats::compute(
                entries.iter().filter(|e| e.confidence >= CONFIDENCE_BAND_HIGH),
            ),
        };

        Self {
            total: overall.total,
            positive: overall.positive,
            negative: overall.total - overall.positive,
            positive_rate: overall.positive_rate,
            web_search,
            internal,
            bands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attune_core::feedback::FeedbackType;
    use test_fixtures::entry;

    #[test]
    fn empty_log_reports_zero_rates() {
        let stats = FeedbackStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.positive_rate, 0.0);
        assert_eq!(stats.web_search.positive_rate, 0.0);
        assert_eq!(stats.bands.high.positive_rate, 0.0);
    }

    #[test]
    fn route_breakdown_partitions_by_trigger_flag() {
        let entries = vec![
            entry(1, FeedbackType::Positive, true, 0.8),
            entry(2, FeedbackType::Negative, true, 0.6),
            entry(3, FeedbackType::Positive, false, 0.9),
            entry(4, FeedbackType::Positive, false, 0.75),
        ];
        let stats = FeedbackStats::compute(&entries);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.positive, 3);
        assert_eq!(stats.negative, 1);
        assert_eq!(stats.web_search.total, 2);
        assert_eq!(stats.web_search.positive_rate, 0.5);
        assert_eq!(stats.internal.total, 2);
        assert_eq!(stats.internal.positive_rate, 1.0);
    }

    #[test]
    fn band_boundaries_are_half_open_below_high() {
        let entries = vec![
            entry(1, FeedbackType::Positive, false, 0.0),
            entry(2, FeedbackType::Positive, false, 0.29),
            entry(3, FeedbackType::Positive, false, 0.3),
            entry(4, FeedbackType::Positive, false, 0.69),
            entry(5, FeedbackType::Positive, false, 0.7),
            entry(6, FeedbackType::Positive, false, 1.0),
        ];
        let stats = FeedbackStats::compute(&entries);
        assert_eq!(stats.bands.low.total, 2);
        assert_eq!(stats.bands.medium.total, 2);
        assert_eq!(stats.bands.high.total, 2);
    }
}
