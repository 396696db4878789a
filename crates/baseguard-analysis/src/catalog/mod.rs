//! Pattern catalog — static, versioned detection rule tables.
//!
//! One table per content type. Rules are independent and order-insensitive:
//! several rules may fire on the same text and contribute the same or
//! different feature names; the tables never assume mutual exclusivity.
//! Adding a rule means touching the table, never the extractor.

mod markup;
mod script;
mod style;

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;

pub use markup::MARKUP_RULES;
pub use script::SCRIPT_RULES;
pub use style::STYLE_RULES;

/// Structural predicate evaluated against the parsed syntax index of a
/// script unit. Script-only; the other content types are text-matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxPredicate {
    /// A call of this bare identifier, e.g. `fetch(...)`.
    Call(&'static str),
    /// A `new` expression constructing this identifier.
    Construct(&'static str),
    /// A member path starting with this prefix, e.g. `navigator.serviceWorker`.
    Member(&'static str),
}

/// One script detection rule. `syntax` rules carry an optional raw-text
/// regex fallback used when structural parsing fails.
#[derive(Debug, Clone, Copy)]
pub struct ScriptRule {
    pub feature: &'static str,
    pub matcher: ScriptMatcher,
}

#[derive(Debug, Clone, Copy)]
pub enum ScriptMatcher {
    /// Literal substring test against the raw text.
    Literal(&'static str),
    /// Regex test against the raw text.
    Pattern(&'static str),
    /// Structural predicate with optional text fallback.
    Syntax {
        predicate: SyntaxPredicate,
        fallback: Option<&'static str>,
    },
}

/// One style detection rule, matched against the parsed rule/declaration
/// tree or the raw text (at-rule markers).
#[derive(Debug, Clone, Copy)]
pub struct StyleRule {
    pub feature: &'static str,
    pub matcher: StyleMatcher,
}

#[derive(Debug, Clone, Copy)]
pub enum StyleMatcher {
    /// Substring of a rule's selector text.
    Selector(&'static str),
    /// Declaration property, exact name or `name-` prefixed longhand.
    Property(&'static str),
    /// Substring of a declaration value.
    Value(&'static str),
    /// Property (exact/longhand) whose value contains the substring.
    PropertyValue(&'static str, &'static str),
    /// Declaration property prefix, e.g. `--` for custom properties.
    PropertyPrefix(&'static str),
    /// At-rule marker scanned in raw text; at-rules may not decompose
    /// cleanly into declarations.
    AtRule(&'static str),
    /// Media-query feature flag, counted only when `@media` is present.
    MediaFeature(&'static str),
}

/// One markup detection rule: a literal token in raw text.
#[derive(Debug, Clone, Copy)]
pub struct MarkupRule {
    pub feature: &'static str,
    pub token: &'static str,
}

/// A script rule with its regexes compiled.
pub struct CompiledScriptRule {
    pub feature: &'static str,
    pub matcher: CompiledScriptMatcher,
}

pub enum CompiledScriptMatcher {
    Literal(&'static str),
    Pattern(Regex),
    Syntax {
        predicate: SyntaxPredicate,
        fallback: Option<Regex>,
    },
}

static COMPILED_SCRIPT_RULES: Lazy<Vec<CompiledScriptRule>> = Lazy::new(|| {
    SCRIPT_RULES
        .iter()
        .map(|rule| CompiledScriptRule {
            feature: rule.feature,
            matcher: match rule.matcher {
                ScriptMatcher::Literal(lit) => CompiledScriptMatcher::Literal(lit),
                ScriptMatcher::Pattern(src) => CompiledScriptMatcher::Pattern(
                    Regex::new(src).expect("static script rule pattern must compile"),
                ),
                ScriptMatcher::Syntax { predicate, fallback } => CompiledScriptMatcher::Syntax {
                    predicate,
                    fallback: fallback.map(|src| {
                        Regex::new(src).expect("static script fallback pattern must compile")
                    }),
                },
            },
        })
        .collect()
});

/// The script rule table with regexes compiled once.
pub fn script_rules() -> &'static [CompiledScriptRule] {
    &COMPILED_SCRIPT_RULES
}

static MARKUP_AUTOMATON: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(MARKUP_RULES.iter().map(|rule| rule.token))
        .expect("static markup token table must compile")
});

/// Single-pass literal automaton over the markup token table. Pattern index
/// `i` corresponds to `MARKUP_RULES[i]`.
pub fn markup_automaton() -> &'static AhoCorasick {
    &MARKUP_AUTOMATON
}

/// Force-compile every table, surfacing bad static patterns at startup
/// instead of at first extraction.
pub fn preload() {
    let _ = script_rules();
    let _ = markup_automaton();
    let _ = STYLE_RULES.len();
}
