//! Configuration loading and validation.

pub mod baseguard_config;

pub use baseguard_config::BaseguardConfig;
