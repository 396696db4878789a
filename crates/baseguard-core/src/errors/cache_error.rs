//! Availability cache errors.
//!
//! These never escape the cache's public API; `load`/`save` absorb them and
//! degrade to an empty or in-memory-only cache.

/// Errors from the on-disk verdict store.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache store I/O failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cache store at {path} is corrupt: {message}")]
    Corrupt { path: String, message: String },
}
