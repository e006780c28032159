//! # attune-learning
//!
//! The online control loop: reads the accumulated feedback log, runs three
//! failure-isolated analyses (web-search threshold, confidence-weight
//! calibration, judge-weight correlation), applies bounded adjustments to
//! the persisted tuning config, and records a performance snapshot. A
//! read-only recommendations pass surfaces the same signals as advisory
//! suggestions without touching the config.

pub mod analysis;
pub mod engine;
pub mod recommendations;
pub mod trend;

pub use engine::{OptimizationReport, Optimizer, RunStatus};
pub use recommendations::{recommend, Recommendation, RecommendationReport, RecommendedAction};
pub use trend::performance_trend;
