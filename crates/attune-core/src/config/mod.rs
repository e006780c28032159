//! Tuning configuration: the mutable, versioned parameter set the optimizer
//! adjusts from feedback.

mod reranking_config;
mod tuning_config;
mod web_search_config;
mod weights;

pub use reranking_config::RerankingConfig;
pub use tuning_config::{ConfigPatch, TuningConfig};
pub use web_search_config::WebSearchConfig;
pub use weights::{ConfidenceWeights, JudgeWeights};
