//! Offline fallback heuristic.
//!
//! Hand-curated and intentionally coarse: three exemplar lists keep the
//! engine usable when the remote service is unreachable. This is not an
//! authoritative source and is not expected to agree with the remote
//! verdict for the same feature.

use std::collections::BTreeMap;

use baseguard_core::constants::TRACKED_BROWSERS;
use baseguard_core::models::{Availability, AvailabilityVerdict, BrowserSupport};

use crate::remote::encode_component;

const WIDELY_EXEMPLARS: &[&str] = &[
    "fetch",
    "Promise",
    "CSS Flexbox",
    "CSS Grid",
    "localStorage",
    "sessionStorage",
    "HTML5 Video",
    "HTML5 Audio",
    "SVG",
    "Canvas",
];

const NEWLY_EXEMPLARS: &[&str] = &[
    "CSS Container Queries",
    "CSS Subgrid",
    "Dialog Element",
    "Lazy Loading",
    "ResizeObserver",
    "IntersectionObserver",
];

const LIMITED_EXEMPLARS: &[&str] = &[
    "CSS backdrop-filter",
    "WebRTC",
    "Web Audio API",
    "Service Worker",
    "Web Workers",
    "IndexedDB",
];

const SUGGESTIONS: &[(&str, &str)] = &[
    ("CSS Subgrid", "Use CSS Grid with nested grids as fallback"),
    ("CSS Container Queries", "Use media queries or JavaScript-based solutions"),
    ("CSS backdrop-filter", "Use semi-transparent backgrounds as fallback"),
    ("Dialog Element", "Use modal libraries or custom implementations"),
    ("WebRTC", "Check for browser support and provide alternative communication methods"),
    (
        "Service Worker",
        "Check for support before registration, app works without offline features",
    ),
    (
        "Web Workers",
        "Provide fallback for heavy computations in main thread with throttling",
    ),
    ("IndexedDB", "Use localStorage as fallback for smaller data storage"),
    ("Web Audio API", "Provide basic audio playback using HTML5 audio element"),
    ("IntersectionObserver", "Use polyfill from https://polyfill.io"),
    ("ResizeObserver", "Use polyfill or fallback to window resize events"),
];

const GENERIC_SUGGESTION: &str = "Check browser compatibility and provide appropriate fallbacks";

/// Classify by exemplar containment, priority widely → newly → limited;
/// no match → unknown. The comparison is case-insensitive.
pub fn classify_offline(feature: &str) -> AvailabilityVerdict {
    let needle = feature.to_lowercase();
    let contains_any =
        |exemplars: &[&str]| exemplars.iter().any(|e| needle.contains(&e.to_lowercase()));

    let availability = if contains_any(WIDELY_EXEMPLARS) {
        Availability::Widely
    } else if contains_any(NEWLY_EXEMPLARS) {
        Availability::Newly
    } else if contains_any(LIMITED_EXEMPLARS) {
        Availability::Limited
    } else {
        Availability::Unknown
    };

    AvailabilityVerdict {
        availability,
        browser_support: default_browser_support(availability),
        suggestion: (availability == Availability::Limited).then(|| suggestion_for(feature)),
        link: Some(search_link(feature)),
    }
}

/// Synthesized support map for heuristic verdicts: widely and newly mark
/// every tracked browser supported; limited and unknown leave all
/// unsupported.
pub fn default_browser_support(availability: Availability) -> BTreeMap<String, BrowserSupport> {
    let support = match availability {
        Availability::Widely => BrowserSupport::supported("supported long-term"),
        Availability::Newly => BrowserSupport::supported("recently supported"),
        Availability::Limited | Availability::Unknown => BrowserSupport::unsupported(),
    };
    TRACKED_BROWSERS
        .iter()
        .map(|browser| (browser.to_string(), support.clone()))
        .collect()
}

/// Remediation hint for a limited feature: substring match against the
/// static table, first match wins, generic fallback otherwise.
pub fn suggestion_for(feature: &str) -> String {
    for (key, suggestion) in SUGGESTIONS {
        if feature.contains(key) {
            return suggestion.to_string();
        }
    }
    GENERIC_SUGGESTION.to_string()
}

/// Reference link for remotely classified features.
pub fn baseline_link(feature: &str) -> String {
    format!("https://web.dev/baseline/{}", encode_component(feature))
}

/// Search link for heuristic and unknown verdicts.
pub fn search_link(feature: &str) -> String {
    format!("https://caniuse.com/?search={}", encode_component(feature))
}
