//! baseguard-baseline: availability classification with cache, remote
//! lookup, and offline heuristic.
//!
//! Resolution is an explicit strategy chain — cache, then remote, then
//! heuristic — evaluated by early return. No path in this crate raises past
//! its caller: remote and persistence failures degrade and are logged, and
//! every feature name always yields a verdict.

pub mod batch;
pub mod cache;
pub mod classifier;
pub mod heuristic;
pub mod remote;

pub use batch::{Batch, BatchAggregator};
pub use cache::{BaselineCache, CacheEntry};
pub use classifier::BaselineClassifier;
pub use remote::{BaselineLookup, HttpLookup, LookupResponse, OfflineLookup};
