//! Style extraction: tolerant rule/declaration walk plus raw at-rule markers.
//!
//! The parser is deliberately small: comments are stripped, blocks are
//! brace-balanced, at-rule bodies recurse into their nested rules, and
//! malformed trailing input yields whatever was parsed before it. At-rule
//! markers are additionally scanned in raw text since at-rules do not always
//! decompose into declarations.

use baseguard_core::models::FeatureSet;

use crate::catalog::{StyleMatcher, STYLE_RULES};

pub(crate) fn extract(source: &str) -> FeatureSet {
    let text = strip_comments(source).to_lowercase();
    let mut rules = Vec::new();
    parse_rules(&text, &mut rules);

    let mut features = FeatureSet::default();
    for rule in STYLE_RULES {
        let hit = match rule.matcher {
            StyleMatcher::Selector(pat) => rules.iter().any(|r| r.selector.contains(pat)),
            StyleMatcher::Property(pat) => {
                any_declaration(&rules, |d| property_matches(&d.property, pat))
            }
            StyleMatcher::Value(pat) => any_declaration(&rules, |d| d.value.contains(pat)),
            StyleMatcher::PropertyValue(prop, pat) => any_declaration(&rules, |d| {
                property_matches(&d.property, prop) && d.value.contains(pat)
            }),
            StyleMatcher::PropertyPrefix(prefix) => {
                any_declaration(&rules, |d| d.property.starts_with(prefix))
            }
            StyleMatcher::AtRule(marker) => text.contains(marker),
            StyleMatcher::MediaFeature(marker) => {
                text.contains("@media") && text.contains(marker)
            }
        };
        if hit {
            features.insert(rule.feature.to_string());
        }
    }
    features
}

#[derive(Debug)]
struct StyleRuleNode {
    selector: String,
    declarations: Vec<Declaration>,
}

#[derive(Debug)]
struct Declaration {
    property: String,
    value: String,
}

fn any_declaration(rules: &[StyleRuleNode], pred: impl Fn(&Declaration) -> bool) -> bool {
    rules.iter().flat_map(|r| &r.declarations).any(pred)
}

/// Exact property name or a `name-` prefixed longhand.
/// `scroll-snap` matches `scroll-snap-type`; `filter` does not match
/// `backdrop-filter`.
fn property_matches(property: &str, pattern: &str) -> bool {
    property == pattern
        || (property.starts_with(pattern) && property.as_bytes().get(pattern.len()) == Some(&b'-'))
}

/// Split `input` into rules. Blocks containing nested blocks (at-rules such
/// as `@media`) recurse; leaf blocks become selector + declarations.
/// Unclosed blocks are tolerated and read to end of input.
fn parse_rules(input: &str, out: &mut Vec<StyleRuleNode>) {
    let bytes = input.as_bytes();
    let mut i = 0;
    let mut prelude_start = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                let prelude = input[prelude_start..i].trim();
                let mut depth = 1usize;
                let mut j = i + 1;
                while j < bytes.len() && depth > 0 {
                    match bytes[j] {
                        b'{' => depth += 1,
                        b'}' => depth -= 1,
                        _ => {}
                    }
                    j += 1;
                }
                let body_end = if depth == 0 { j - 1 } else { bytes.len() };
                let body = &input[i + 1..body_end];
                if body.contains('{') {
                    parse_rules(body, out);
                } else if !prelude.is_empty() {
                    out.push(StyleRuleNode {
                        selector: prelude.to_string(),
                        declarations: parse_declarations(body),
                    });
                }
                i = j;
                prelude_start = i;
            }
            // Statement at-rules (`@import ...;`) carry no block.
            b';' => {
                i += 1;
                prelude_start = i;
            }
            _ => i += 1,
        }
    }
}

fn parse_declarations(body: &str) -> Vec<Declaration> {
    body.split(';')
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let property = property.trim();
            if property.is_empty() {
                return None;
            }
            Some(Declaration {
                property: property.to_string(),
                value: value.trim().to_string(),
            })
        })
        .collect()
}

fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}
