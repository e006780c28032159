//! # attune-storage
//!
//! The two persisted resources of the tuning loop: the append-only feedback
//! log and the versioned tuning config. Both persist as whole JSON documents
//! written via a temp file + rename, matching the single-service deployment
//! model (no cross-process coordination).

pub mod config_store;
pub mod feedback_log;
pub mod stats;

pub use config_store::ConfigStore;
pub use feedback_log::FeedbackLog;
pub use stats::{BandStats, ConfidenceBands, FeedbackStats, RouteStats};

use std::fs;
use std::path::Path;

use attune_core::{AttuneError, AttuneResult};

/// Serialize `value` to `path` atomically (write sibling temp, then rename).
pub(crate) fn persist_json<T: serde::Serialize>(path: &Path, value: &T) -> AttuneResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| AttuneError::persistence(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| AttuneError::persistence(path, e))?;
    Ok(())
}

/// Make sure the parent directory of a store file exists.
pub(crate) fn ensure_parent_dir(path: &Path) -> AttuneResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| AttuneError::persistence(parent, e))?;
        }
    }
    Ok(())
}
