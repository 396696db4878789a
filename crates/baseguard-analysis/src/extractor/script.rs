//! Script extraction: syntax-aware matching with text fallback.
//!
//! The source is parsed with tree-sitter's JavaScript grammar (module-style,
//! permissive — ERROR nodes are tolerated and the surviving subtrees still
//! contribute). Structural rules are evaluated against a syntax index of
//! called identifiers, constructed identifiers, and member paths; detection
//! is presence-based over the whole unit, not per-node.

use baseguard_core::models::FeatureSet;
use rustc_hash::FxHashSet;
use tree_sitter::{Node, Parser};

use crate::catalog::{script_rules, CompiledScriptMatcher, SyntaxPredicate};

pub(crate) fn extract(source: &str) -> FeatureSet {
    match build_index(source) {
        Some(index) => match_rules(source, Some(&index)),
        None => {
            tracing::warn!("script parse produced no tree; degrading to text-only rules");
            match_rules(source, None)
        }
    }
}

fn match_rules(source: &str, index: Option<&SyntaxIndex>) -> FeatureSet {
    let mut features = FeatureSet::default();
    for rule in script_rules() {
        let hit = match &rule.matcher {
            CompiledScriptMatcher::Literal(lit) => source.contains(lit),
            CompiledScriptMatcher::Pattern(re) => re.is_match(source),
            CompiledScriptMatcher::Syntax { predicate, fallback } => match index {
                Some(idx) => idx.matches(predicate),
                // Degraded path: structural rules run their text fallback
                // or sit this unit out.
                None => fallback.as_ref().is_some_and(|re| re.is_match(source)),
            },
        };
        if hit {
            features.insert(rule.feature.to_string());
        }
    }
    features
}

/// Presence index over one parsed script unit.
#[derive(Debug, Default)]
struct SyntaxIndex {
    /// Bare identifiers that appear as call targets.
    calls: FxHashSet<String>,
    /// Identifiers that appear after `new`.
    constructs: FxHashSet<String>,
    /// Whitespace-normalized member paths, e.g. `navigator.serviceWorker.register`.
    members: FxHashSet<String>,
}

impl SyntaxIndex {
    fn matches(&self, predicate: &SyntaxPredicate) -> bool {
        match predicate {
            SyntaxPredicate::Call(name) => self.calls.contains(*name),
            SyntaxPredicate::Construct(name) => self.constructs.contains(*name),
            SyntaxPredicate::Member(prefix) => {
                self.members.iter().any(|path| path.starts_with(prefix))
            }
        }
    }
}

fn build_index(source: &str) -> Option<SyntaxIndex> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .ok()?;
    let tree = parser.parse(source, None)?;
    let mut index = SyntaxIndex::default();
    collect(tree.root_node(), source.as_bytes(), &mut index);
    Some(index)
}

fn collect(node: Node, source: &[u8], index: &mut SyntaxIndex) {
    match node.kind() {
        "call_expression" => {
            if let Some(callee) = node.child_by_field_name("function") {
                if callee.kind() == "identifier" {
                    if let Ok(name) = callee.utf8_text(source) {
                        index.calls.insert(name.to_string());
                    }
                }
            }
        }
        "new_expression" => {
            if let Some(ctor) = node.child_by_field_name("constructor") {
                if ctor.kind() == "identifier" {
                    if let Ok(name) = ctor.utf8_text(source) {
                        index.constructs.insert(name.to_string());
                    }
                }
            }
        }
        "member_expression" => {
            if let Ok(path) = node.utf8_text(source) {
                // Normalize line-broken chains like `navigator\n  .clipboard`.
                let normalized: String = path.chars().filter(|c| !c.is_whitespace()).collect();
                index.members.insert(normalized);
            }
        }
        _ => {}
    }
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            collect(child, source, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_rules_ignore_strings_and_comments() {
        let source = r#"
            // fetch('/nope')
            const msg = "new WebSocket is not used here";
            const data = fetch('/api');
        "#;
        let features = extract(source);
        assert!(features.contains("fetch"));
        assert!(!features.contains("WebSocket"));
    }

    #[test]
    fn constructors_and_members_detected() {
        let source = r#"
            const obs = new IntersectionObserver(onSeen);
            navigator.serviceWorker.register('/sw.js');
            localStorage.setItem('k', 'v');
            customElements.define('x-card', Card);
        "#;
        let features = extract(source);
        assert!(features.contains("IntersectionObserver"));
        assert!(features.contains("ServiceWorker"));
        assert!(features.contains("localStorage"));
        assert!(features.contains("CustomElements"));
    }

    #[test]
    fn partial_syntax_still_contributes() {
        // Broken tail must not suppress the valid head.
        let source = "const x = fetch('/api');\nfunction oops( {{{";
        assert!(extract(source).contains("fetch"));
    }

    #[test]
    fn async_await_is_text_matched() {
        assert!(extract("async function load() { await save(); }").contains("async/await"));
    }

    #[test]
    fn member_chains_normalize_across_lines() {
        let source = "navigator\n  .clipboard\n  .writeText(value);";
        assert!(extract(source).contains("Clipboard API"));
    }
}
