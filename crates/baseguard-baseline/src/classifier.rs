//! Compatibility classifier — cache, remote, heuristic, in that order.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use baseguard_core::config::BaseguardConfig;
use baseguard_core::errors::LookupError;
use baseguard_core::models::{Availability, AvailabilityVerdict};

use crate::cache::BaselineCache;
use crate::heuristic;
use crate::remote::{BaselineLookup, HttpLookup, OfflineLookup};

/// Resolves feature names to availability verdicts.
///
/// Owns the cache for the duration of a run; concurrent `classify` calls
/// (rayon fan-out in the aggregator) serialize on the in-memory cache, and
/// the store is written back once via `persist` after a batch completes.
pub struct BaselineClassifier {
    cache: Mutex<BaselineCache>,
    lookup: Box<dyn BaselineLookup>,
}

impl BaselineClassifier {
    pub fn new(cache: BaselineCache, lookup: Box<dyn BaselineLookup>) -> Self {
        Self { cache: Mutex::new(cache), lookup }
    }

    /// Classifier that never touches the network (cache + heuristic only).
    pub fn offline(cache: BaselineCache) -> Self {
        Self::new(cache, Box::new(OfflineLookup))
    }

    /// Wire a classifier from resolved configuration: cache store at the
    /// configured path, remote adapter unless offline mode is set.
    pub fn from_config(config: &BaseguardConfig) -> Result<Self, LookupError> {
        let cache = BaselineCache::load(config.cache_file());
        if config.offline() {
            return Ok(Self::offline(cache));
        }
        let lookup = HttpLookup::new(
            config.api_base_url(),
            Duration::from_millis(config.timeout_ms()),
        )?;
        Ok(Self::new(cache, Box::new(lookup)))
    }

    /// Classify one feature. Never errors: the strategy chain is evaluated
    /// in order and the first verdict wins; the final arm is total.
    pub fn classify(&self, feature: &str) -> AvailabilityVerdict {
        self.from_cache(feature)
            .or_else(|| self.from_remote(feature))
            .or_else(|| self.from_heuristic(feature))
            .unwrap_or_else(|| unknown_verdict(feature))
    }

    /// Write the cache store back to disk (single post-batch write).
    pub fn persist(&self) {
        self.lock_cache().save();
    }

    /// Hand the cache back, e.g. for inspection after a run.
    pub fn into_cache(self) -> BaselineCache {
        self.cache.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Step 1: fresh cache hit is returned unchanged — including degraded
    /// verdicts cached by an earlier offline run.
    fn from_cache(&self, feature: &str) -> Option<AvailabilityVerdict> {
        let cache = self.lock_cache();
        let verdict = cache.get(feature).cloned();
        if verdict.is_some() {
            tracing::debug!(feature, "fresh cache hit");
        }
        verdict
    }

    /// Step 2: remote lookup through the adapter; failures fall through.
    fn from_remote(&self, feature: &str) -> Option<AvailabilityVerdict> {
        match self.lookup.lookup(feature) {
            Ok(response) => {
                let availability = Availability::from_status(&response.status);
                let verdict = AvailabilityVerdict {
                    availability,
                    browser_support: response.browser_support,
                    suggestion: (availability == Availability::Limited)
                        .then(|| heuristic::suggestion_for(feature)),
                    link: Some(heuristic::baseline_link(feature)),
                };
                self.store(feature, &verdict);
                Some(verdict)
            }
            Err(LookupError::Disabled) => {
                tracing::debug!(feature, "remote lookup disabled");
                None
            }
            Err(e) => {
                tracing::warn!(feature, error = %e, "remote lookup failed; using heuristic");
                None
            }
        }
    }

    /// Step 3: offline heuristic. Total — and the degraded verdict is
    /// cached too, so a later run within the freshness window reuses it.
    fn from_heuristic(&self, feature: &str) -> Option<AvailabilityVerdict> {
        let verdict = heuristic::classify_offline(feature);
        self.store(feature, &verdict);
        Some(verdict)
    }

    fn store(&self, feature: &str, verdict: &AvailabilityVerdict) {
        self.lock_cache().put(feature, verdict.clone());
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, BaselineCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Step 4: the total-failure verdict. Never cached.
fn unknown_verdict(feature: &str) -> AvailabilityVerdict {
    AvailabilityVerdict {
        availability: Availability::Unknown,
        browser_support: BTreeMap::new(),
        suggestion: Some("check compatibility tables externally".to_string()),
        link: Some(heuristic::search_link(feature)),
    }
}
