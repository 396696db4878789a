//! End-to-end batch tests: extraction feeds aggregation feeds classification.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use baseguard_analysis::FeatureExtractor;
use baseguard_baseline::{
    BaselineCache, BaselineClassifier, BaselineLookup, BatchAggregator, LookupResponse,
};
use baseguard_core::errors::LookupError;
use baseguard_core::models::{Availability, ContentType};

/// Records every feature it is asked about; always answers "widely".
struct CountingLookup {
    calls: Arc<AtomicUsize>,
}

impl BaselineLookup for CountingLookup {
    fn lookup(&self, _feature: &str) -> Result<LookupResponse, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(LookupResponse { status: "widely".to_string(), browser_support: Default::default() })
    }
}

fn offline_classifier() -> BaselineClassifier {
    BaselineClassifier::offline(BaselineCache::in_memory())
}

#[test]
fn shared_feature_lists_both_artifacts_in_scan_order() {
    let extractor = FeatureExtractor::new();
    let mut aggregator = BatchAggregator::new();
    aggregator.fold("a.js", &extractor.extract("fetch('/one')", ContentType::Script));
    aggregator.fold("b.js", &extractor.extract("fetch('/two')", ContentType::Script));

    let batch = aggregator.classify_with(&offline_classifier());
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.record("fetch").unwrap().files, vec!["a.js", "b.js"]);
}

#[test]
fn unparseable_artifact_never_aborts_the_batch() {
    let extractor = FeatureExtractor::new();
    let mut aggregator = BatchAggregator::new();
    // Binary garbage as script: degrades to whatever the text fallback finds.
    aggregator.fold(
        "garbage.js",
        &extractor.extract("\u{0}\u{1}\u{2} not ((( javascript", ContentType::Script),
    );
    aggregator.fold(
        "app.css",
        &extractor.extract(".hero { backdrop-filter: blur(4px); }", ContentType::Style),
    );

    let batch = aggregator.classify_with(&offline_classifier());
    let record = batch.record("CSS backdrop-filter").unwrap();
    assert_eq!(record.files, vec!["app.css"]);
    assert_eq!(record.verdict.availability, Availability::Limited);
}

#[test]
fn each_distinct_feature_is_classified_once() {
    let extractor = FeatureExtractor::new();
    let mut aggregator = BatchAggregator::new();
    for artifact in ["a.js", "b.js", "c.js"] {
        aggregator.fold(
            artifact,
            &extractor.extract("fetch('/api'); new Promise(go);", ContentType::Script),
        );
    }
    assert_eq!(aggregator.len(), 2);

    let calls = Arc::new(AtomicUsize::new(0));
    let classifier = BaselineClassifier::new(
        BaselineCache::in_memory(),
        Box::new(CountingLookup { calls: Arc::clone(&calls) }),
    );
    let batch = aggregator.classify_with(&classifier);
    assert_eq!(batch.len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn summary_counts_each_availability_bucket() {
    let extractor = FeatureExtractor::new();
    let mut aggregator = BatchAggregator::new();
    aggregator.fold(
        "page.css",
        &extractor.extract(
            ".a { display: grid; }\n.b { backdrop-filter: blur(2px); }",
            ContentType::Style,
        ),
    );
    aggregator.fold(
        "page.html",
        &extractor.extract("<img src=\"x.png\" loading=\"lazy\">", ContentType::Markup),
    );

    let batch = aggregator.classify_with(&offline_classifier());
    let summary = batch.summary();
    assert_eq!(summary.total, batch.len());
    assert_eq!(summary.widely, 1); // CSS Grid
    assert_eq!(summary.newly, 1); // Native Lazy Loading
    assert_eq!(summary.limited, 1); // CSS backdrop-filter
    assert_eq!(summary.unknown, 0);
}
