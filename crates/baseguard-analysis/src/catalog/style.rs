//! Style rule table — CSS feature signals in selectors, declarations, and
//! at-rule markers.

use super::{StyleMatcher, StyleRule};

pub const STYLE_RULES: &[StyleRule] = &[
    StyleRule { feature: "CSS Grid", matcher: StyleMatcher::Selector("grid") },
    StyleRule { feature: "CSS Grid", matcher: StyleMatcher::PropertyValue("display", "grid") },
    StyleRule { feature: "CSS Flexbox", matcher: StyleMatcher::PropertyValue("display", "flex") },
    StyleRule {
        feature: "CSS Subgrid",
        matcher: StyleMatcher::PropertyValue("grid-template", "subgrid"),
    },
    StyleRule { feature: "CSS clip-path", matcher: StyleMatcher::Property("clip-path") },
    StyleRule { feature: "CSS Masking", matcher: StyleMatcher::Property("mask") },
    StyleRule { feature: "CSS Filters", matcher: StyleMatcher::Property("filter") },
    StyleRule {
        feature: "CSS backdrop-filter",
        matcher: StyleMatcher::Property("backdrop-filter"),
    },
    StyleRule { feature: "CSS Blend Modes", matcher: StyleMatcher::Property("mix-blend-mode") },
    StyleRule { feature: "CSS object-fit", matcher: StyleMatcher::Property("object-fit") },
    StyleRule { feature: "CSS Scroll Snap", matcher: StyleMatcher::Property("scroll-snap") },
    StyleRule {
        feature: "CSS position: sticky",
        matcher: StyleMatcher::PropertyValue("position", "sticky"),
    },
    StyleRule { feature: "CSS aspect-ratio", matcher: StyleMatcher::Property("aspect-ratio") },
    StyleRule { feature: "CSS gap", matcher: StyleMatcher::Property("gap") },
    StyleRule { feature: "CSS place-items", matcher: StyleMatcher::Property("place-items") },
    StyleRule { feature: "CSS Containment", matcher: StyleMatcher::Property("contain") },
    StyleRule {
        feature: "CSS Custom Properties",
        matcher: StyleMatcher::PropertyPrefix("--"),
    },
    StyleRule { feature: "CSS Custom Properties", matcher: StyleMatcher::Value("var(") },
    StyleRule { feature: "CSS Color Level 4", matcher: StyleMatcher::Value("lab(") },
    StyleRule { feature: "CSS Color Level 4", matcher: StyleMatcher::Value("lch(") },
    StyleRule { feature: "CSS @supports", matcher: StyleMatcher::AtRule("@supports") },
    StyleRule { feature: "CSS Container Queries", matcher: StyleMatcher::AtRule("@container") },
    StyleRule {
        feature: "prefers-color-scheme",
        matcher: StyleMatcher::MediaFeature("prefers-color-scheme"),
    },
    StyleRule {
        feature: "prefers-reduced-motion",
        matcher: StyleMatcher::MediaFeature("prefers-reduced-motion"),
    },
];
