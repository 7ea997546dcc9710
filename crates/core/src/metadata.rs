use serde::{Deserialize, Serialize};

use crate::Document;
use crate::parse::{MarkupNode, MarkupTree};

/// Page-level metadata folded into the content outline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Document {
    /// Extract the declared `<title>`, trimmed. Inner whitespace is kept as written.
    ///
    /// Returns `None` when the element is missing or has no text.
    pub fn extract_title(&self) -> Option<String> {
        self.title().map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
    }

    /// Extract description with priority fallback:
    /// 1. Meta `name="description"`
    /// 2. Open Graph `og:description`
    pub fn extract_description(&self) -> Option<String> {
        self.meta_content("name", "description")
            .or_else(|| self.meta_content("property", "og:description"))
    }

    /// Extract all metadata at once
    pub fn extract_metadata(&self) -> PageMetadata {
        PageMetadata { title: self.extract_title(), description: self.extract_description() }
    }

    /// Trimmed `content` of the first `meta[attr="value"]` that has non-empty content
    fn meta_content(&self, attr: &str, value: &str) -> Option<String> {
        self.elements(&format!("meta[{attr}=\"{value}\"]"))
            .iter()
            .filter_map(|el| el.attr("content"))
            .map(str::trim)
            .find(|content| !content.is_empty())
            .map(str::to_string)
    }
}
