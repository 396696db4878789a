//! Classifier strategy-chain tests with the remote lookup stubbed.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use baseguard_baseline::{BaselineCache, BaselineClassifier, BaselineLookup, LookupResponse};
use baseguard_core::errors::LookupError;
use baseguard_core::models::{Availability, BrowserSupport};

/// Scripted remote: returns a fixed response or a fixed failure, counting calls.
struct StubLookup {
    response: Result<(&'static str, Vec<(&'static str, bool)>), &'static str>,
    calls: Arc<AtomicUsize>,
}

impl StubLookup {
    fn ok(status: &'static str, browsers: Vec<(&'static str, bool)>) -> Self {
        Self { response: Ok((status, browsers)), calls: Arc::new(AtomicUsize::new(0)) }
    }

    fn failing() -> Self {
        Self { response: Err("connection refused"), calls: Arc::new(AtomicUsize::new(0)) }
    }
}

impl BaselineLookup for StubLookup {
    fn lookup(&self, _feature: &str) -> Result<LookupResponse, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok((status, browsers)) => Ok(LookupResponse {
                status: status.to_string(),
                browser_support: browsers
                    .iter()
                    .map(|(name, supported)| {
                        (
                            name.to_string(),
                            BrowserSupport { supported: *supported, note: String::new() },
                        )
                    })
                    .collect::<BTreeMap<_, _>>(),
            }),
            Err(reason) => Err(LookupError::Transport { reason: reason.to_string() }),
        }
    }
}

#[test]
fn offline_classification_is_deterministic() {
    let first = BaselineClassifier::offline(BaselineCache::in_memory()).classify("CSS Grid");
    let second = BaselineClassifier::offline(BaselineCache::in_memory()).classify("CSS Grid");
    assert_eq!(first, second);
    assert_eq!(first.availability, Availability::Widely);
}

#[test]
fn backdrop_filter_offline_scenario() {
    let classifier = BaselineClassifier::offline(BaselineCache::in_memory());
    let verdict = classifier.classify("CSS backdrop-filter");
    assert_eq!(verdict.availability, Availability::Limited);
    assert!(verdict.suggestion.as_deref().is_some_and(|s| !s.is_empty()));
    assert!(!verdict.browser_support.is_empty());
    assert!(verdict.browser_support.values().all(|b| !b.supported));
}

#[test]
fn remote_verdict_takes_status_and_browser_map() {
    let lookup = StubLookup::ok("widely", vec![("chrome", true), ("safari", true)]);
    let classifier = BaselineClassifier::new(BaselineCache::in_memory(), Box::new(lookup));

    let verdict = classifier.classify("fetch");
    assert_eq!(verdict.availability, Availability::Widely);
    assert_eq!(verdict.browser_support.len(), 2);
    assert!(verdict.suggestion.is_none());
    assert_eq!(verdict.link.as_deref(), Some("https://web.dev/baseline/fetch"));

    // Stored for the next run.
    let cache = classifier.into_cache();
    assert_eq!(cache.get("fetch").unwrap().availability, Availability::Widely);
}

#[test]
fn remote_limited_verdict_gets_a_suggestion() {
    let lookup = StubLookup::ok("limited", vec![]);
    let classifier = BaselineClassifier::new(BaselineCache::in_memory(), Box::new(lookup));
    let verdict = classifier.classify("CSS backdrop-filter");
    assert_eq!(verdict.availability, Availability::Limited);
    assert_eq!(
        verdict.suggestion.as_deref(),
        Some("Use semi-transparent backgrounds as fallback")
    );
}

#[test]
fn unrecognized_remote_status_maps_to_unknown() {
    let lookup = StubLookup::ok("baseline-2025", vec![]);
    let classifier = BaselineClassifier::new(BaselineCache::in_memory(), Box::new(lookup));
    assert_eq!(classifier.classify("fetch").availability, Availability::Unknown);
}

#[test]
fn remote_failure_falls_through_to_heuristic_and_caches() {
    let classifier =
        BaselineClassifier::new(BaselineCache::in_memory(), Box::new(StubLookup::failing()));
    let verdict = classifier.classify("WebRTC");
    assert_eq!(verdict.availability, Availability::Limited);
    // The degraded verdict is cached like any other.
    let cache = classifier.into_cache();
    assert_eq!(cache.get("WebRTC").unwrap().availability, Availability::Limited);
}

#[test]
fn cache_hit_skips_the_remote_entirely() {
    let mut cache = BaselineCache::in_memory();
    cache.put("fetch", BaselineClassifier::offline(BaselineCache::in_memory()).classify("fetch"));

    let lookup = StubLookup::ok("limited", vec![]);
    let calls = Arc::clone(&lookup.calls);
    let classifier = BaselineClassifier::new(cache, Box::new(lookup));
    let verdict = classifier.classify("fetch");
    assert_eq!(verdict.availability, Availability::Widely);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn expired_cache_entry_is_reclassified() {
    let mut cache = BaselineCache::in_memory();
    let stale = BaselineClassifier::offline(BaselineCache::in_memory()).classify("Houdini");
    cache.put_at("CSS Grid", stale, 1_000); // far outside the freshness window

    let classifier = BaselineClassifier::offline(cache);
    assert_eq!(classifier.classify("CSS Grid").availability, Availability::Widely);
}
