//! Markup rule table — HTML5 element, attribute, and form-feature tokens.
//!
//! Literal tokens suffice here; the signals are tag and attribute spellings.

use super::MarkupRule;

pub const MARKUP_RULES: &[MarkupRule] = &[
    MarkupRule { feature: "HTML5 Video", token: "<video" },
    MarkupRule { feature: "HTML5 Audio", token: "<audio" },
    MarkupRule { feature: "HTML5 Canvas", token: "<canvas" },
    MarkupRule { feature: "SVG", token: "<svg" },
    MarkupRule { feature: "Picture Element", token: "<picture" },
    MarkupRule { feature: "Picture/Video Source", token: "<source" },
    MarkupRule { feature: "HTML Template", token: "<template" },
    MarkupRule { feature: "HTML Slots", token: "<slot" },
    MarkupRule { feature: "HTML Dialog", token: "<dialog" },
    MarkupRule { feature: "HTML Details/Summary", token: "<details" },
    MarkupRule { feature: "Native Lazy Loading", token: "loading=\"lazy\"" },
    MarkupRule { feature: "Image Decode API", token: "decoding=\"async\"" },
    MarkupRule { feature: "HTML5 Date Input", token: "type=\"date\"" },
    MarkupRule { feature: "HTML5 Color Input", token: "type=\"color\"" },
    MarkupRule { feature: "HTML5 Range Input", token: "type=\"range\"" },
    MarkupRule { feature: "HTML5 Form Validation", token: "required" },
    MarkupRule { feature: "HTML5 Pattern Validation", token: "pattern=" },
];
