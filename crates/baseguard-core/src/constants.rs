//! Workspace-wide constants.

/// Browsers tracked in every synthesized support map, in display order.
pub const TRACKED_BROWSERS: [&str; 4] = ["chrome", "edge", "firefox", "safari"];

/// Cached verdicts older than this are treated as absent (passive expiry).
pub const FRESHNESS_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Default timeout for one remote availability lookup.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default base URL of the remote availability service.
pub const DEFAULT_API_BASE_URL: &str = "https://api.baseline.web.dev/v1/features";

/// Default on-disk cache store filename.
pub const DEFAULT_CACHE_FILE: &str = "baseline-cache.json";
