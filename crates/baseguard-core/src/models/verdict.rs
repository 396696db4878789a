//! Availability verdicts — the classifier's output type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Cross-browser availability maturity of one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Widely,
    Newly,
    Limited,
    #[default]
    Unknown,
}

impl Availability {
    /// Parse a remote status string. Unrecognized values are `Unknown` —
    /// the wire schema is an adapter boundary, not a fixed contract.
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "widely" => Self::Widely,
            "newly" => Self::Newly,
            "limited" => Self::Limited,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Widely => "widely",
            Self::Newly => "newly",
            Self::Limited => "limited",
            Self::Unknown => "unknown",
        }
    }
}

/// Support state for one tracked browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSupport {
    pub supported: bool,
    #[serde(default)]
    pub note: String,
}

impl BrowserSupport {
    pub fn supported(note: &str) -> Self {
        Self { supported: true, note: note.to_string() }
    }

    pub fn unsupported() -> Self {
        Self { supported: false, note: String::new() }
    }
}

/// The classification of one feature. Immutable once produced; a later
/// classification replaces the whole verdict (last-write-wins, no merge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityVerdict {
    pub availability: Availability,
    /// Browser name → support state. Empty when the source provided none.
    #[serde(default)]
    pub browser_support: BTreeMap<String, BrowserSupport>,
    /// Remediation hint; populated for limited and unresolved verdicts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Reference link derived from the feature name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
