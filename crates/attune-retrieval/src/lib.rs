//! # attune-retrieval
//!
//! Deterministic rank fusion (RRF) of the two source rankings and the
//! confidence/judge scoring functions that read learned weights.

pub mod fusion;
pub mod scoring;

pub use fusion::{fuse, FusedResult, RankedResult};
pub use scoring::{should_trigger_web_search, weighted_confidence, weighted_judge_score};
