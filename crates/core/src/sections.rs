//! Section reconstruction from a block sequence.
//!
//! The walk is a left fold over [`Block`]s carrying a [`SectionWalk`]: the
//! in-progress section (if any) and the sections emitted so far.
//!
//! | block        | no current section                       | current section                                            |
//! |--------------|------------------------------------------|------------------------------------------------------------|
//! | h2 / h3      | open `{title}`                            | emit current if non-empty, open `{title}`                  |
//! | paragraph    | open `{title: text}`                      | subtitle if unset, no points yet and long enough; else point |
//! | list item    | open `{title: "Highlights", points: [text]}` | push point                                              |
//! | h1           | skipped                                   | skipped                                                    |

use serde::{Deserialize, Serialize};

use crate::blocks::{Block, BlockTag};

/// Title given to a section opened by a list item with no preceding heading.
pub const FALLBACK_SECTION_TITLE: &str = "Highlights";

/// A titled grouping of a subtitle and bullet points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub subtitle: Option<String>,
    pub points: Vec<String>,
}

impl Section {
    /// Opens a section with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), subtitle: None, points: Vec::new() }
    }

    /// Whether any field carries content.
    pub fn is_non_empty(&self) -> bool {
        !self.title.trim().is_empty() || self.subtitle.is_some() || !self.points.is_empty()
    }
}

/// Accumulator for the section walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionWalk {
    pub current: Option<Section>,
    pub emitted: Vec<Section>,
    /// A paragraph becomes a subtitle only with strictly more words than this.
    subtitle_min_words: usize,
}

impl SectionWalk {
    pub fn new(subtitle_min_words: usize) -> Self {
        Self { current: None, emitted: Vec::new(), subtitle_min_words }
    }

    /// Applies one block to the walk.
    pub fn step(mut self, block: &Block) -> Self {
        match block.tag {
            BlockTag::H2 | BlockTag::H3 => {
                self.emit_current();
                self.current = Some(Section::titled(&block.text));
            }
            BlockTag::Paragraph => match self.current.as_mut() {
                None => self.current = Some(Section::titled(&block.text)),
                Some(section) => {
                    if section.subtitle.is_none()
                        && section.points.is_empty()
                        && block.word_count() > self.subtitle_min_words
                    {
                        section.subtitle = Some(block.text.clone());
                    } else {
                        section.points.push(block.text.clone());
                    }
                }
            },
            BlockTag::ListItem => match self.current.as_mut() {
                None => {
                    let mut section = Section::titled(FALLBACK_SECTION_TITLE);
                    section.points.push(block.text.clone());
                    self.current = Some(section);
                }
                Some(section) => section.points.push(block.text.clone()),
            },
            BlockTag::H1 => {}
        }
        self
    }

    /// Emits the trailing section and returns everything emitted, uncapped.
    pub fn finish(mut self) -> Vec<Section> {
        self.emit_current();
        self.emitted
    }

    fn emit_current(&mut self) {
        if let Some(section) = self.current.take()
            && section.is_non_empty()
        {
            self.emitted.push(section);
        }
    }
}

/// Runs the walk over `blocks` and applies the caps: at most `max_points`
/// points per section and at most `max_sections` sections, keeping the
/// earliest of each.
pub fn build_sections(
    blocks: &[Block], subtitle_min_words: usize, max_sections: usize, max_points: usize,
) -> Vec<Section> {
    let mut sections = blocks
        .iter()
        .fold(SectionWalk::new(subtitle_min_words), SectionWalk::step)
        .finish();

    for section in &mut sections {
        section.points.truncate(max_points);
    }
    sections.truncate(max_sections);
    sections
}
