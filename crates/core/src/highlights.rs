//! Highlight lines drawn from the top of the page.

use serde::{Deserialize, Serialize};

use crate::blocks::{Block, BlockTag};

/// Appended to an excerpt that was cut short.
pub const ELLIPSIS: char = '…';

/// A short display-ready line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    /// Reserved; always `None`.
    pub text: Option<String>,
}

impl Highlight {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), text: None }
    }
}

/// Limits for [`build_highlights`].
#[derive(Debug, Clone, Copy)]
pub struct HighlightLimits {
    pub max_highlights: usize,
    pub scan_window: usize,
    pub excerpt_chars: usize,
    pub min_words: usize,
}

/// Scans the first `scan_window` blocks for highlights.
///
/// Level-1 and level-2 headings contribute their full text. Paragraphs with
/// more than `min_words` words contribute an excerpt. Scanning stops as soon
/// as `max_highlights` have been collected.
pub fn build_highlights(blocks: &[Block], limits: HighlightLimits) -> Vec<Highlight> {
    let mut highlights = Vec::new();

    for block in blocks.iter().take(limits.scan_window) {
        if highlights.len() >= limits.max_highlights {
            break;
        }

        match block.tag {
            BlockTag::H1 | BlockTag::H2 => highlights.push(Highlight::new(&block.text)),
            BlockTag::Paragraph if block.word_count() > limits.min_words => {
                highlights.push(Highlight::new(excerpt(&block.text, limits.excerpt_chars)))
            }
            _ => {}
        }
    }

    highlights
}

/// First `max_chars` characters of `text`, with [`ELLIPSIS`] appended when
/// anything was cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut out = text[..cut].to_string();
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}
