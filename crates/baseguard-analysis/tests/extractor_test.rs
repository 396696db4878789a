//! Extractor scenario tests across all three content types.

use baseguard_analysis::FeatureExtractor;
use baseguard_core::models::{ContentType, FeatureSet};
use proptest::prelude::*;

fn extract(source: &str, content_type: ContentType) -> FeatureSet {
    FeatureExtractor::new().extract(source, content_type)
}

#[test]
fn script_scenario() {
    let features = extract("const x = fetch('/api')", ContentType::Script);
    let expected: FeatureSet = ["fetch".to_string()].into_iter().collect();
    assert_eq!(features, expected);
}

#[test]
fn style_scenario() {
    let features = extract(
        ".a{ display:flex } .b{ backdrop-filter: blur(4px) }",
        ContentType::Style,
    );
    let expected: FeatureSet = ["CSS Flexbox".to_string(), "CSS backdrop-filter".to_string()]
        .into_iter()
        .collect();
    assert_eq!(features, expected);
}

#[test]
fn markup_scenario() {
    let features = extract(
        r#"<video></video><img loading="lazy">"#,
        ContentType::Markup,
    );
    let expected: FeatureSet = ["HTML5 Video".to_string(), "Native Lazy Loading".to_string()]
        .into_iter()
        .collect();
    assert_eq!(features, expected);
}

#[test]
fn mixed_script_unit() {
    let source = r#"
        async function boot() {
            const socket = new WebSocket('wss://example');
            const media = window.matchMedia('(max-width: 600px)');
            await navigator.clipboard.writeText('ready');
        }
    "#;
    let features = extract(source, ContentType::Script);
    assert!(features.contains("async/await"));
    assert!(features.contains("WebSocket"));
    assert!(features.contains("matchMedia"));
    assert!(features.contains("Clipboard API"));
}

#[test]
fn garbage_input_never_panics() {
    for content_type in [ContentType::Script, ContentType::Style, ContentType::Markup] {
        let _ = extract("%%%%@@@@{{{{", content_type);
        let _ = extract("\u{0000}\u{fffd}", content_type);
    }
}

proptest! {
    // extract(s, t) is a pure function: identical input, identical set.
    #[test]
    fn extraction_is_idempotent(source in ".{0,200}") {
        for content_type in [ContentType::Script, ContentType::Style, ContentType::Markup] {
            let first = extract(&source, content_type);
            let second = extract(&source, content_type);
            prop_assert_eq!(first, second);
        }
    }
}
