//! Flattening a document into text-bearing blocks.
//!
//! A [`Block`] is one heading, paragraph or list item with its text trimmed
//! and whitespace-collapsed. The outline heuristics only ever see this flat,
//! document-ordered sequence.

use serde::{Deserialize, Serialize};

use crate::parse::{MarkupNode, MarkupTree};

/// Elements that produce blocks, as one selector group so matches come back
/// in document order.
pub const BLOCK_SELECTOR: &str = "h1, h2, h3, p, li";

/// Kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockTag {
    #[serde(rename = "heading-1")]
    H1,
    #[serde(rename = "heading-2")]
    H2,
    #[serde(rename = "heading-3")]
    H3,
    Paragraph,
    ListItem,
}

impl BlockTag {
    /// Maps a lowercase tag name onto a block kind.
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "p" => Some(Self::Paragraph),
            "li" => Some(Self::ListItem),
            _ => None,
        }
    }
}

/// A document-order unit of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub tag: BlockTag,
    pub text: String,
}

impl Block {
    /// Builds a block from raw element text. Returns `None` when nothing but
    /// whitespace remains.
    pub fn new(tag: BlockTag, raw: &str) -> Option<Self> {
        let text = normalize_text(raw);
        if text.is_empty() { None } else { Some(Self { tag, text }) }
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }
}

/// Collapses whitespace runs into single spaces and trims both ends.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Counts whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Collects every non-empty block of the document in document order.
///
/// Nested matches each produce their own block, so `<li><p>x</p></li>`
/// yields a list item followed by a paragraph with the same text.
pub fn collect_blocks<T: MarkupTree>(tree: &T) -> Vec<Block> {
    tree.elements(BLOCK_SELECTOR)
        .iter()
        .filter_map(|el| {
            let tag = BlockTag::from_tag_name(&el.tag_name())?;
            Block::new(tag, &el.text())
        })
        .collect()
}
