//! Supported content types and the file-extension mapping.

use serde::{Deserialize, Serialize};

/// The three content types the extractor understands.
///
/// Determines which pattern table applies. Anything else is skipped by the
/// caller — unsupported extensions map to `None`, never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Script,
    Style,
    Markup,
}

impl ContentType {
    /// Map a file extension (without the dot, case-insensitive) to a content type.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs" => Some(Self::Script),
            "css" | "scss" | "sass" => Some(Self::Style),
            "html" | "htm" => Some(Self::Markup),
            _ => None,
        }
    }

    /// Map an artifact path to a content type via its extension.
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = path.rsplit('.').next()?;
        // A path with no dot yields itself from rsplit; reject that case.
        if ext.len() == path.len() {
            return None;
        }
        Self::from_extension(ext)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Style => "style",
            Self::Markup => "markup",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_mapping() {
        assert_eq!(ContentType::from_extension("tsx"), Some(ContentType::Script));
        assert_eq!(ContentType::from_extension("SCSS"), Some(ContentType::Style));
        assert_eq!(ContentType::from_extension("htm"), Some(ContentType::Markup));
        assert_eq!(ContentType::from_extension("wasm"), None);
    }

    #[test]
    fn path_mapping() {
        assert_eq!(ContentType::from_path("dist/app.min.js"), Some(ContentType::Script));
        assert_eq!(ContentType::from_path("index.html"), Some(ContentType::Markup));
        assert_eq!(ContentType::from_path("Makefile"), None);
    }
}
