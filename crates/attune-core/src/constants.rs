// Single source of truth for all default values and tuning bounds.

// --- Fusion ---
pub const DEFAULT_RRF_K: u32 = 60;

// --- Web search gating ---
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;
pub const DEFAULT_JUDGE_THRESHOLD: f64 = 5.0;
pub const DEFAULT_WEB_SEARCH_ENABLED: bool = true;
pub const CONFIDENCE_THRESHOLD_MIN: f64 = 0.5;
pub const CONFIDENCE_THRESHOLD_MAX: f64 = 0.9;

// --- Confidence weighting ---
pub const DEFAULT_RETRIEVAL_WEIGHT: f64 = 0.5;
pub const DEFAULT_ANSWER_WEIGHT: f64 = 0.5;
pub const CONFIDENCE_WEIGHT_MIN: f64 = 0.3;
pub const CONFIDENCE_WEIGHT_MAX: f64 = 0.7;

// --- Judge weighting ---
pub const DEFAULT_RELEVANCE_WEIGHT: f64 = 0.4;
pub const DEFAULT_FACTUALITY_WEIGHT: f64 = 0.4;
pub const DEFAULT_COMPLETENESS_WEIGHT: f64 = 0.2;
/// Neutral midpoint used when a judge score is absent.
pub const NEUTRAL_JUDGE_SCORE: f64 = 5.0;

// --- Reranking (read by the reranking layer, persisted here) ---
pub const DEFAULT_RERANK_MIN_SCORE: f64 = -12.0;
pub const DEFAULT_RERANK_TOP_K: usize = 5;

// --- Optimizer ---
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_MIN_SAMPLES: usize = 5;
/// Minimum entries per partition before the web-search analysis runs.
pub const MIN_PARTITION_SAMPLES: usize = 3;
/// Minimum scored entries per metric before judge-weight adaptation runs.
pub const MIN_JUDGE_SAMPLES: usize = 10;
/// Positive-rate gap between routes that justifies a threshold move.
pub const SIGNIFICANT_RATE_GAP: f64 = 0.15;
/// High-confidence band must stay above this positive rate.
pub const HIGH_CONFIDENCE_TARGET_RATE: f64 = 0.6;
/// Judge weights only change when the largest per-metric delta exceeds this.
pub const JUDGE_WEIGHT_CHANGE_EPSILON: f64 = 0.05;

// --- Recommendations (advisory; never mutates config) ---
/// Feedback entries required before recommendations are produced.
pub const MIN_RECOMMENDATION_SAMPLES: usize = 10;
/// Each route must exceed this count before a threshold recommendation.
pub const ROUTE_RECOMMENDATION_FLOOR: usize = 5;
/// Positive-rate gap between routes that earns a recommendation.
pub const RECOMMENDATION_RATE_GAP: f64 = 0.2;
/// Suggested threshold when web search is outperforming.
pub const RECOMMENDED_THRESHOLD_DECREASED: f64 = 0.6;
/// Suggested threshold when internal retrieval is outperforming.
pub const RECOMMENDED_THRESHOLD_INCREASED: f64 = 0.9;
/// The high band must exceed this count before a calibration recommendation.
pub const BAND_RECOMMENDATION_FLOOR: usize = 3;

// --- Confidence bands ---
pub const CONFIDENCE_BAND_LOW: f64 = 0.3;
pub const CONFIDENCE_BAND_HIGH: f64 = 0.7;

// --- Performance history ---
pub const PERFORMANCE_HISTORY_CAP: usize = 50;
/// Trend improvement beyond ±this classifies as improving/declining.
pub const TREND_EPSILON: f64 = 0.02;
