//! Remote availability lookup behind an adapter trait.
//!
//! The wire schema is a configurable boundary, not a fixed contract: any
//! adapter maps its own response shape onto `LookupResponse`. The shipped
//! HTTP adapter expects `GET <base>/<urlencoded-feature>` returning
//! `{ "status": ..., "browser_support": {...} }`; any non-2xx status or
//! malformed body is a lookup failure the classifier absorbs.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use baseguard_core::errors::LookupError;
use baseguard_core::models::BrowserSupport;

/// Parsed remote response, whatever the adapter's native schema was.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    pub status: String,
    #[serde(default)]
    pub browser_support: BTreeMap<String, BrowserSupport>,
}

/// One availability lookup against an external source.
pub trait BaselineLookup: Send + Sync {
    fn lookup(&self, feature: &str) -> Result<LookupResponse, LookupError>;
}

/// Blocking HTTP adapter for the availability service.
pub struct HttpLookup {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpLookup {
    /// Build a client with a bounded per-request timeout. Expiry is treated
    /// identically to any other transport failure — no retry, no backoff.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport { reason: e.to_string() })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

impl BaselineLookup for HttpLookup {
    fn lookup(&self, feature: &str) -> Result<LookupResponse, LookupError> {
        let url = format!("{}/{}", self.base_url, encode_component(feature));
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| LookupError::Transport { reason: e.to_string() })?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status { status: status.as_u16() });
        }
        response
            .json::<LookupResponse>()
            .map_err(|e| LookupError::Malformed { message: e.to_string() })
    }
}

/// Lookup that always fails; used when the configuration disables the
/// network and by tests that force the heuristic path.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineLookup;

impl BaselineLookup for OfflineLookup {
    fn lookup(&self, _feature: &str) -> Result<LookupResponse, LookupError> {
        Err(LookupError::Disabled)
    }
}

/// Percent-encode a feature name for use as one URL path segment or query
/// value. Unreserved characters pass through unchanged.
pub fn encode_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_passes_unreserved_through() {
        assert_eq!(encode_component("backdrop-filter"), "backdrop-filter");
        assert_eq!(encode_component("CSS Grid"), "CSS%20Grid");
        assert_eq!(encode_component("async/await"), "async%2Fawait");
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn response_parses_with_missing_browser_map() {
        let response: LookupResponse = serde_json::from_str(r#"{ "status": "widely" }"#).unwrap();
        assert_eq!(response.status, "widely");
        assert!(response.browser_support.is_empty());
    }

    #[test]
    fn offline_lookup_always_fails() {
        assert!(matches!(
            OfflineLookup.lookup("fetch"),
            Err(LookupError::Disabled)
        ));
    }
}
