use serde::{Deserialize, Serialize};

/// Direction of the positive-rate trend across recorded snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
}

/// Recent-vs-older comparison of batch positive rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTrend {
    pub recent_positive_rate: f64,
    pub older_positive_rate: f64,
    /// `recent - older`; beyond ±0.02 classifies as improving/declining.
    pub improvement: f64,
    pub direction: TrendDirection,
    /// Snapshots available when the trend was computed.
    pub data_points: usize,
}
