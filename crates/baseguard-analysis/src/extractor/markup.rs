//! Markup extraction: one automaton pass over raw text.

use baseguard_core::models::FeatureSet;

use crate::catalog::{markup_automaton, MARKUP_RULES};

pub(crate) fn extract(source: &str) -> FeatureSet {
    let mut features = FeatureSet::default();
    for m in markup_automaton().find_overlapping_iter(source) {
        features.insert(MARKUP_RULES[m.pattern().as_usize()].feature.to_string());
    }
    features
}
