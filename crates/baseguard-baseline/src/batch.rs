//! Batch aggregation: fold per-file scan results, classify each distinct
//! feature exactly once, emit records plus bucket counts.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use baseguard_core::models::{BatchSummary, FeatureRecord, FeatureSet};

use crate::classifier::BaselineClassifier;

/// Accumulates `(artifact, scan result)` pairs for one batch.
///
/// Feature records keep first-appearance order of artifacts, duplicates
/// removed; the record itself is created on first sight of the feature.
#[derive(Debug, Default)]
pub struct BatchAggregator {
    order: Vec<String>,
    files: FxHashMap<String, Vec<String>>,
}

impl BatchAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one artifact's scan result into the batch.
    pub fn fold(&mut self, artifact: &str, features: &FeatureSet) {
        for feature in features {
            match self.files.get_mut(feature) {
                Some(list) => {
                    if !list.iter().any(|f| f == artifact) {
                        list.push(artifact.to_string());
                    }
                }
                None => {
                    self.order.push(feature.clone());
                    self.files.insert(feature.clone(), vec![artifact.to_string()]);
                }
            }
        }
    }

    /// Number of distinct features folded so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolve every distinct feature exactly once and complete the batch.
    ///
    /// Classification fans out across features (they have no data
    /// dependency on each other) and joins before the batch is considered
    /// complete; the cache store is written once after the join. File
    /// ordering in the records is independent of this concurrency.
    pub fn classify_with(self, classifier: &BaselineClassifier) -> Batch {
        let BatchAggregator { order, mut files } = self;

        let verdicts: Vec<_> = order
            .par_iter()
            .map(|feature| classifier.classify(feature))
            .collect();
        classifier.persist();

        let mut summary = BatchSummary::default();
        let mut records = Vec::with_capacity(order.len());
        let mut index = FxHashMap::default();
        for (feature, verdict) in order.into_iter().zip(verdicts) {
            summary.count(verdict.availability);
            let files = files.remove(&feature).unwrap_or_default();
            index.insert(feature.clone(), records.len());
            records.push(FeatureRecord { feature, verdict, files });
        }
        tracing::info!(features = records.len(), "batch classification complete");
        Batch { records, index, summary }
    }
}

/// One completed scanning + classification pass. Transient: built, read by
/// the report/policy collaborators, discarded.
#[derive(Debug)]
pub struct Batch {
    records: Vec<FeatureRecord>,
    index: FxHashMap<String, usize>,
    summary: BatchSummary,
}

impl Batch {
    /// Records in first-seen feature order.
    pub fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    pub fn record(&self, feature: &str) -> Option<&FeatureRecord> {
        self.index.get(feature).map(|&i| &self.records[i])
    }

    pub fn summary(&self) -> BatchSummary {
        self.summary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
