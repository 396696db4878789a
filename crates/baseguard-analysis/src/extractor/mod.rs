//! Feature extraction — `(source text, content type)` in, feature set out.
//!
//! Pure and idempotent: no I/O, no file identity, no cross-unit state.
//! Per-unit failures degrade to an empty set; they never abort a batch.

mod markup;
mod script;
mod style;

use baseguard_core::models::{ContentType, FeatureSet};

/// Applies the pattern catalog to one source unit at a time.
#[derive(Debug, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the deduplicated set of feature names from one source unit.
    pub fn extract(&self, source: &str, content_type: ContentType) -> FeatureSet {
        match content_type {
            ContentType::Script => script::extract(source),
            ContentType::Style => style::extract(source),
            ContentType::Markup => markup::extract(source),
        }
    }
}
