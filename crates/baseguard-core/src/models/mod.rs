//! Shared data model: content types, verdicts, records.

pub mod content_type;
pub mod record;
pub mod verdict;

pub use content_type::ContentType;
pub use record::{BatchSummary, FeatureRecord};
pub use verdict::{Availability, AvailabilityVerdict, BrowserSupport};

/// Deduplicated feature names detected in one source unit.
/// Membership only — no ordering guarantee.
pub type FeatureSet = rustc_hash::FxHashSet<String>;
