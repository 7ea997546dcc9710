//! Content outline output type and its configuration.
//!
//! [`ContentOutline`] is the complete result of outline extraction: the
//! echoed source, page metadata, highlight lines and sections.

use serde::{Deserialize, Serialize};

use crate::blocks::{Block, collect_blocks};
use crate::highlights::{Highlight, HighlightLimits, build_highlights};
use crate::parse::Document;
use crate::sections::{Section, build_sections};

/// Tunables for outline extraction.
///
/// Word gates are exclusive: a paragraph needs strictly more words than the
/// gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Maximum number of highlights (default: 6).
    pub max_highlights: usize,
    /// Number of leading blocks scanned for highlights (default: 40).
    pub highlight_scan_window: usize,
    /// Characters kept in a paragraph highlight before the ellipsis (default: 120).
    pub highlight_excerpt_chars: usize,
    /// Paragraph word gate for highlights (default: 6).
    pub highlight_min_words: usize,
    /// Paragraph word gate for section subtitles (default: 4).
    pub subtitle_min_words: usize,
    /// Maximum number of sections (default: 10).
    pub max_sections: usize,
    /// Maximum points per section (default: 8).
    pub max_points: usize,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            max_highlights: 6,
            highlight_scan_window: 40,
            highlight_excerpt_chars: 120,
            highlight_min_words: 6,
            subtitle_min_words: 4,
            max_sections: 10,
            max_points: 8,
        }
    }
}

impl OutlineConfig {
    fn highlight_limits(&self) -> HighlightLimits {
        HighlightLimits {
            max_highlights: self.max_highlights,
            scan_window: self.highlight_scan_window,
            excerpt_chars: self.highlight_excerpt_chars,
            min_words: self.highlight_min_words,
        }
    }
}

/// The normalized outline of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentOutline {
    /// The input URL, echoed back.
    pub source: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub highlights: Vec<Highlight>,
    pub sections: Vec<Section>,
}

impl ContentOutline {
    /// Builds the outline of an already parsed document.
    pub fn from_document(doc: &Document, source: impl Into<String>, config: &OutlineConfig) -> Self {
        let metadata = doc.extract_metadata();
        let blocks = collect_blocks(doc);
        let (highlights, sections) = outline_blocks(&blocks, config);

        Self { source: source.into(), title: metadata.title, description: metadata.description, highlights, sections }
    }

    /// Serializes to a JSON value.
    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Runs the highlight scan and the section walk over the same blocks.
pub fn outline_blocks(blocks: &[Block], config: &OutlineConfig) -> (Vec<Highlight>, Vec<Section>) {
    let highlights = build_highlights(blocks, config.highlight_limits());
    let sections = build_sections(blocks, config.subtitle_min_words, config.max_sections, config.max_points);
    (highlights, sections)
}
