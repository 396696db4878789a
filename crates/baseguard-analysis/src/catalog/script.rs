//! Script rule table — web platform API usage in JavaScript/TypeScript.
//!
//! Structural predicates avoid false positives from comments and string
//! literals; each carries a regex fallback for the degraded text-only path.

use super::{ScriptMatcher, ScriptRule, SyntaxPredicate};

pub const SCRIPT_RULES: &[ScriptRule] = &[
    ScriptRule {
        feature: "fetch",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Call("fetch"),
            fallback: Some(r"\bfetch\s*\("),
        },
    },
    ScriptRule {
        feature: "IntersectionObserver",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Construct("IntersectionObserver"),
            fallback: Some(r"\bnew\s+IntersectionObserver\b"),
        },
    },
    ScriptRule {
        feature: "ResizeObserver",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Construct("ResizeObserver"),
            fallback: Some(r"\bnew\s+ResizeObserver\b"),
        },
    },
    ScriptRule {
        feature: "MutationObserver",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Construct("MutationObserver"),
            fallback: Some(r"\bnew\s+MutationObserver\b"),
        },
    },
    ScriptRule {
        feature: "Promise",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Construct("Promise"),
            fallback: Some(r"\bnew\s+Promise\b"),
        },
    },
    ScriptRule {
        feature: "async/await",
        matcher: ScriptMatcher::Pattern(r"\basync\s+function\b|\basync\s*\(|\bawait\s"),
    },
    ScriptRule {
        feature: "ServiceWorker",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Member("navigator.serviceWorker"),
            fallback: Some(r"navigator\.serviceWorker"),
        },
    },
    ScriptRule {
        feature: "WebSocket",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Construct("WebSocket"),
            fallback: Some(r"\bnew\s+WebSocket\b"),
        },
    },
    ScriptRule {
        feature: "localStorage",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Member("localStorage."),
            fallback: Some(r"\blocalStorage\."),
        },
    },
    ScriptRule {
        feature: "sessionStorage",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Member("sessionStorage."),
            fallback: Some(r"\bsessionStorage\."),
        },
    },
    ScriptRule {
        feature: "Geolocation",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Member("navigator.geolocation"),
            fallback: Some(r"navigator\.geolocation"),
        },
    },
    ScriptRule {
        feature: "Notification",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Construct("Notification"),
            fallback: Some(r"\bnew\s+Notification\b"),
        },
    },
    ScriptRule {
        feature: "Web Workers",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Construct("Worker"),
            fallback: Some(r"\bnew\s+Worker\b"),
        },
    },
    ScriptRule {
        feature: "IndexedDB",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Member("indexedDB."),
            fallback: Some(r"\bindexedDB\."),
        },
    },
    ScriptRule {
        feature: "Web Audio API",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Construct("AudioContext"),
            fallback: Some(r"\bnew\s+AudioContext\b"),
        },
    },
    ScriptRule {
        feature: "WebRTC",
        matcher: ScriptMatcher::Pattern(r"\bRTCPeerConnection\b"),
    },
    ScriptRule {
        feature: "File API",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Construct("FileReader"),
            fallback: Some(r"\bnew\s+FileReader\b"),
        },
    },
    ScriptRule {
        feature: "Clipboard API",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Member("navigator.clipboard"),
            fallback: Some(r"navigator\.clipboard"),
        },
    },
    ScriptRule {
        feature: "Broadcast Channel",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Construct("BroadcastChannel"),
            fallback: Some(r"\bnew\s+BroadcastChannel\b"),
        },
    },
    ScriptRule {
        feature: "requestAnimationFrame",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Call("requestAnimationFrame"),
            fallback: Some(r"\brequestAnimationFrame\s*\("),
        },
    },
    ScriptRule {
        feature: "matchMedia",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Member("window.matchMedia"),
            fallback: Some(r"window\.matchMedia"),
        },
    },
    ScriptRule {
        feature: "CustomElements",
        matcher: ScriptMatcher::Syntax {
            predicate: SyntaxPredicate::Member("customElements.define"),
            fallback: Some(r"customElements\.define"),
        },
    },
];
