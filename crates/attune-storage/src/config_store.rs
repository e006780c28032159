//! Versioned, persisted tuning configuration.
//!
//! Readers take consistent snapshots without blocking writers for long;
//! writers are serialized by the inner `RwLock`. Every successful update
//! advances `version` by exactly one and rewrites the whole document. A
//! failed write leaves the in-memory config as updated but the on-disk
//! version unadvanced, so a restart recovers the last persisted state.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::Utc;
use tracing::{debug, info, warn};

use attune_core::config::{ConfigPatch, TuningConfig};
use attune_core::{AttuneError, AttuneResult};

use crate::{ensure_parent_dir, persist_json};

pub struct ConfigStore {
    path: PathBuf,
    config: RwLock<TuningConfig>,
}

impl ConfigStore {
    /// Open the store at `path`.
    ///
    /// A missing file writes defaults (version 1, no increment); a corrupt
    /// file is logged and replaced by defaults, accepting loss of learned
    /// adjustments over refusing to start. Missing fields in a readable
    /// file fill from defaults.
    pub fn open(path: impl Into<PathBuf>) -> AttuneResult<Self> {
        let path = path.into();
        ensure_parent_dir(&path)?;

        let config = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<TuningConfig>(&raw) {
                Ok(config) => {
                    info!(
                        path = %path.display(),
                        version = config.version,
                        threshold = config.web_search.confidence_threshold,
                        "tuning config loaded"
                    );
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt tuning config, using defaults");
                    let defaults = TuningConfig::default();
                    persist_json(&path, &defaults)?;
                    defaults
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let defaults = TuningConfig::default();
                persist_json(&path, &defaults)?;
                info!(path = %path.display(), "tuning config initialized with defaults");
                defaults
            }
            Err(e) => return Err(AttuneError::persistence(&path, e)),
        };

        Ok(Self {
            path,
            config: RwLock::new(config),
        })
    }

    /// A consistent copy of the current config.
    pub fn snapshot(&self) -> TuningConfig {
        match self.config.read() {
            Ok(guard) => guard.clone(),
            // A poisoned lock still holds a structurally valid config.
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Apply a shallow patch: each `Some` field replaces the entire
    /// top-level value. Bumps `version`, refreshes `last_updated`, persists
    /// the whole document, and returns the updated config.
    pub fn update(&self, patch: ConfigPatch) -> AttuneResult<TuningConfig> {
        let mut guard = self.config.write().map_err(|_| AttuneError::LockPoisoned {
            resource: "tuning config",
        })?;

        guard.apply(patch);
        guard.version += 1;
        guard.last_updated = Utc::now();

        persist_json(&self.path, &*guard)?;
        debug!(version = guard.version, "tuning config persisted");
        Ok(guard.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
