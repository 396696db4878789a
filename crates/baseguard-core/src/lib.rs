//! baseguard-core: shared models, errors, and configuration.
//!
//! Everything the analysis and baseline crates agree on lives here:
//! - Models: content types, verdicts, feature records, batch summaries
//! - Errors: one enum per subsystem, `thiserror` only, zero `anyhow`
//! - Config: layered resolution with fail-fast validation
//! - Constants: tracked browsers, freshness window, service defaults

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

pub use config::BaseguardConfig;
pub use errors::{CacheError, ConfigError, LookupError};
pub use models::{
    Availability, AvailabilityVerdict, BatchSummary, BrowserSupport, ContentType, FeatureSet,
};
