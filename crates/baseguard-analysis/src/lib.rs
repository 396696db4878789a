//! baseguard-analysis: pattern catalog and feature extraction.
//!
//! Syntax-first detection with text fallback: script sources are parsed with
//! tree-sitter and matched through structural predicates; when parsing yields
//! nothing the extractor degrades to the rules' text patterns instead of
//! failing the unit. Style sources are walked as a rule/declaration tree,
//! markup is a single literal-automaton pass.

pub mod catalog;
pub mod extractor;

pub use extractor::FeatureExtractor;
