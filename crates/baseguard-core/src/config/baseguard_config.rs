//! Engine configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_CACHE_FILE, DEFAULT_TIMEOUT_MS, TRACKED_BROWSERS,
};
use crate::errors::ConfigError;

/// Engine configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BASEGUARD_*`)
/// 2. Project config (`baseguard.toml` in the given root)
/// 3. Compiled defaults
///
/// Unset fields fall back to the compiled defaults exposed through the
/// accessor methods. Validation failures are hard errors and must be
/// surfaced before the engine runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseguardConfig {
    /// Base URL of the remote availability service.
    pub api_base_url: Option<String>,
    /// Path of the on-disk verdict cache.
    pub cache_file: Option<PathBuf>,
    /// Remote lookup timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Disable the remote lookup entirely; classify from cache + heuristic.
    pub offline: Option<bool>,
    /// Browsers reported in synthesized support maps.
    pub browsers: Vec<String>,
}

impl BaseguardConfig {
    /// Load configuration with layered resolution, then validate.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_path = root.join("baseguard.toml");
        if project_path.exists() {
            Self::merge_toml_file(&mut config, &project_path)?;
        }

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn cache_file(&self) -> PathBuf {
        self.cache_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_FILE))
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }

    pub fn offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }

    pub fn browsers(&self) -> Vec<String> {
        if self.browsers.is_empty() {
            TRACKED_BROWSERS.iter().map(|b| b.to_string()).collect()
        } else {
            self.browsers.clone()
        }
    }

    /// Validate the resolved configuration.
    ///
    /// Unknown browser names are a warning, not an error — the support map
    /// simply carries whatever names the user asked for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.api_base_url {
            if url.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "api_base_url".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(timeout) = self.timeout_ms {
            if timeout == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "timeout_ms".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        for browser in &self.browsers {
            if browser.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "browsers".to_string(),
                    message: "browser names must not be empty".to_string(),
                });
            }
            if !TRACKED_BROWSERS.contains(&browser.to_ascii_lowercase().as_str()) {
                tracing::warn!(
                    browser = %browser,
                    "unknown browser in config; known: {}",
                    TRACKED_BROWSERS.join(", ")
                );
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut Self, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;
        let file_config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins where it has a value.
    fn merge(base: &mut Self, other: &Self) {
        if other.api_base_url.is_some() {
            base.api_base_url = other.api_base_url.clone();
        }
        if other.cache_file.is_some() {
            base.cache_file = other.cache_file.clone();
        }
        if other.timeout_ms.is_some() {
            base.timeout_ms = other.timeout_ms;
        }
        if other.offline.is_some() {
            base.offline = other.offline;
        }
        if !other.browsers.is_empty() {
            base.browsers = other.browsers.clone();
        }
    }

    /// Apply environment variable overrides (highest priority).
    fn apply_env_overrides(config: &mut Self) {
        if let Ok(val) = std::env::var("BASEGUARD_API_BASE_URL") {
            config.api_base_url = Some(val);
        }
        if let Ok(val) = std::env::var("BASEGUARD_CACHE_FILE") {
            config.cache_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("BASEGUARD_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.timeout_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASEGUARD_OFFLINE") {
            if let Ok(v) = val.parse::<bool>() {
                config.offline = Some(v);
            }
        }
    }
}
