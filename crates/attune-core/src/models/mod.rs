//! Shared result and report types produced by the tuning loop.

mod adjustment;
mod judgment;
mod performance_snapshot;
mod trend;

pub use adjustment::Adjustment;
pub use judgment::{AnswerJudgment, Judgment, RetrievalJudgment};
pub use performance_snapshot::PerformanceSnapshot;
pub use trend::{PerformanceTrend, TrendDirection};
