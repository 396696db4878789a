//! Error handling for Baseguard.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod cache_error;
pub mod config_error;
pub mod lookup_error;

pub use cache_error::CacheError;
pub use config_error::ConfigError;
pub use lookup_error::LookupError;
