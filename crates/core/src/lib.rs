pub mod blocks;
pub mod contacts;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod highlights;
pub mod metadata;
pub mod outline;
pub mod parse;
pub mod scrape;
pub mod sections;

pub use blocks::{Block, BlockTag, collect_blocks};
pub use contacts::{ContactKind, ContactSet, classify_links, normalize_email};
pub use error::{FetchError, Result, SiteliftError};
pub use fetch::{DEFAULT_TIMEOUT_SECS, FetchConfig, fetch_file, fetch_stdin};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use formatters::{
    JsonConfig, JsonFormatter, MarkdownConfig, MarkdownFormatter, PageReport, TextConfig, TextFormatter,
};
pub use formatters::{convert_to_json, convert_to_markdown, convert_to_text};
pub use highlights::Highlight;
pub use metadata::PageMetadata;
pub use outline::{ContentOutline, OutlineConfig};
pub use parse::{Document, MarkupNode, MarkupTree};
pub use scrape::{Scraper, ScraperConfig, ScraperConfigBuilder, contacts_from_html, outline_from_html};
#[cfg(feature = "fetch")]
pub use scrape::{extract_contacts, extract_outline};
pub use sections::{Section, SectionWalk};
