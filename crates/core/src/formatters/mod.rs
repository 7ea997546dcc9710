//! Renderers for extraction results.

use serde::{Deserialize, Serialize};

use crate::contacts::ContactSet;
use crate::outline::ContentOutline;

pub mod json;
pub mod markdown;
pub mod text;
pub mod toml;

pub use json::{JsonConfig, JsonFormatter, convert_to_json};
pub use markdown::{MarkdownConfig, MarkdownFormatter, convert_to_markdown};
pub use text::{TextConfig, TextFormatter, convert_to_text};
pub use toml::outline_to_toml;

/// Everything extracted from one page. Either half may be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<ContactSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<ContentOutline>,
}
