//! Recent-vs-older performance comparison over recorded snapshots.

use attune_core::constants::TREND_EPSILON;
use attune_core::models::{PerformanceSnapshot, PerformanceTrend, TrendDirection};

fn mean_positive_rate(window: &[PerformanceSnapshot]) -> f64 {
    window.iter().map(|s| s.positive_rate).sum::<f64>() / window.len() as f64
}

/// Classify the positive-rate trend. Needs at least 2 snapshots.
///
/// The window is `min(5, n / 2)` snapshots: the last window against the
/// first window. Improvement beyond ±0.02 classifies as improving or
/// declining, anything between as stable.
pub fn performance_trend(history: &[PerformanceSnapshot]) -> Option<PerformanceTrend> {
    let n = history.len();
    if n < 2 {
        return None;
    }

    let window = (n / 2).min(5).max(1);
    let recent = &history[n - window..];
    let older = &history[..window];

    let recent_positive_rate = mean_positive_rate(recent);
    let older_positive_rate = mean_positive_rate(older);
    let improvement = recent_positive_rate - older_positive_rate;

    let direction = if improvement > TREND_EPSILON {
        TrendDirection::Improving
    } else if improvement < -TREND_EPSILON {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    Some(PerformanceTrend {
        recent_positive_rate,
        older_positive_rate,
        improvement,
        direction,
        data_points: n,
    })
}
