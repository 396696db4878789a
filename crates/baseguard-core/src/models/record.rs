//! Aggregation records: per-feature results and batch summary counts.

use serde::{Deserialize, Serialize};

use super::verdict::{Availability, AvailabilityVerdict};

/// One classified feature with the artifacts it was seen in.
///
/// `files` preserves first-occurrence order with duplicates removed and is
/// never empty for a materialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub feature: String,
    pub verdict: AvailabilityVerdict,
    pub files: Vec<String>,
}

/// Derived counts per availability bucket for one completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub widely: usize,
    pub newly: usize,
    pub limited: usize,
    pub unknown: usize,
}

impl BatchSummary {
    /// Fold one verdict into the counts.
    pub fn count(&mut self, availability: Availability) {
        self.total += 1;
        match availability {
            Availability::Widely => self.widely += 1,
            Availability::Newly => self.newly += 1,
            Availability::Limited => self.limited += 1,
            Availability::Unknown => self.unknown += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_buckets() {
        let mut summary = BatchSummary::default();
        summary.count(Availability::Widely);
        summary.count(Availability::Widely);
        summary.count(Availability::Limited);
        summary.count(Availability::Unknown);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.widely, 2);
        assert_eq!(summary.newly, 0);
        assert_eq!(summary.limited, 1);
        assert_eq!(summary.unknown, 1);
    }
}
