//! Persisted verdict cache with passive expiry.
//!
//! One JSON object keyed by feature name, value `{ data, timestamp }` with
//! epoch-millis timestamps. Load and save are best-effort: a missing or
//! corrupt store yields an empty cache, a failed write is logged and never
//! fails the classification that triggered it.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use baseguard_core::constants::FRESHNESS_WINDOW_MS;
use baseguard_core::errors::CacheError;
use baseguard_core::models::AvailabilityVerdict;

/// One stored verdict with its observation time (epoch millis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: AvailabilityVerdict,
    pub timestamp: i64,
}

/// The availability cache. Owns the on-disk store exclusively; the
/// classifier is the only writer, through `put`.
#[derive(Debug, Default)]
pub struct BaselineCache {
    path: Option<PathBuf>,
    entries: FxHashMap<String, CacheEntry>,
    dirty: bool,
}

impl BaselineCache {
    /// Open the store at `path`. Missing or corrupt files yield an empty
    /// cache with a warning, never an error.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::try_load(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "could not load verdict cache; starting empty");
                FxHashMap::default()
            }
        };
        Self { path: Some(path), entries, dirty: false }
    }

    /// A cache with no backing store; used for tests and for runs where the
    /// store path is unwritable.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Fresh verdict for `feature`, or `None`.
    ///
    /// Entries past the freshness window report absent even though the
    /// underlying store still lists them (passive expiry, no purge).
    pub fn get(&self, feature: &str) -> Option<&AvailabilityVerdict> {
        self.get_at(feature, now_ms())
    }

    /// Freshness-checked read against an explicit clock.
    pub fn get_at(&self, feature: &str, now_ms: i64) -> Option<&AvailabilityVerdict> {
        let entry = self.entries.get(feature)?;
        if now_ms - entry.timestamp >= FRESHNESS_WINDOW_MS {
            return None;
        }
        Some(&entry.data)
    }

    /// Store a verdict, replacing any previous entry (last-write-wins).
    pub fn put(&mut self, feature: &str, verdict: AvailabilityVerdict) {
        self.put_at(feature, verdict, now_ms());
    }

    /// Timestamped write against an explicit clock.
    pub fn put_at(&mut self, feature: &str, verdict: AvailabilityVerdict, timestamp: i64) {
        self.entries
            .insert(feature.to_string(), CacheEntry { data: verdict, timestamp });
        self.dirty = true;
    }

    /// Whether the underlying store holds a row for `feature`, fresh or not.
    pub fn contains(&self, feature: &str) -> bool {
        self.entries.contains_key(feature)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whole-file rewrite of the store. Best-effort: failures are logged and
    /// the in-memory entries remain authoritative for this run.
    pub fn save(&mut self) {
        if !self.dirty {
            return;
        }
        let Some(path) = self.path.clone() else {
            // In-memory cache: nothing to persist.
            self.dirty = false;
            return;
        };
        match self.try_save(&path) {
            Ok(()) => self.dirty = false,
            Err(e) => {
                tracing::warn!(error = %e, "could not save verdict cache; continuing in memory")
            }
        }
    }

    fn try_load(path: &Path) -> Result<FxHashMap<String, CacheEntry>, CacheError> {
        if !path.exists() {
            return Ok(FxHashMap::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| CacheError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| CacheError::Corrupt {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn try_save(&self, path: &Path) -> Result<(), CacheError> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(|e| CacheError::Corrupt {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(path, json).map_err(|source| CacheError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
