use crate::contacts::ContactSet;
use crate::formatters::PageReport;
use crate::formatters::toml::outline_to_toml;
use crate::outline::ContentOutline;

/// Configuration for Markdown output
#[derive(Debug, Clone, Default)]
pub struct MarkdownConfig {
    /// Include TOML frontmatter with page metadata
    pub include_frontmatter: bool,
}

/// Render a report as Markdown
///
/// The outline becomes a `#` title, the description, a highlight list and one
/// `##` heading per section. Contacts follow as a bullet list.
pub fn convert_to_markdown(report: &PageReport, config: &MarkdownConfig) -> String {
    let mut output = String::new();

    if let Some(outline) = &report.outline {
        if config.include_frontmatter {
            output.push_str("+++\n");
            output.push_str(&outline_to_toml(outline));
            output.push_str("+++\n\n");
        }
        output.push_str(&outline_to_markdown(outline));
    }

    if let Some(contacts) = &report.contacts {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&contacts_to_markdown(contacts));
    }

    output
}

fn outline_to_markdown(outline: &ContentOutline) -> String {
    let mut md = String::new();

    if let Some(title) = &outline.title {
        md.push_str(&format!("# {}\n\n", escape_inline(title)));
    }

    if let Some(description) = &outline.description {
        md.push_str(&format!("{}\n\n", escape_inline(description)));
    }

    if !outline.highlights.is_empty() {
        md.push_str("## Highlights\n\n");
        for highlight in &outline.highlights {
            md.push_str(&format!("- {}\n", escape_inline(&highlight.title)));
        }
        md.push('\n');
    }

    for section in &outline.sections {
        md.push_str(&format!("## {}\n\n", escape_inline(&section.title)));
        if let Some(subtitle) = &section.subtitle {
            md.push_str(&format!("_{}_\n\n", escape_inline(subtitle)));
        }
        if !section.points.is_empty() {
            for point in &section.points {
                md.push_str(&format!("- {}\n", escape_inline(point)));
            }
            md.push('\n');
        }
    }

    md
}

fn contacts_to_markdown(contacts: &ContactSet) -> String {
    let mut md = String::from("## Contacts\n\n");

    let entries = [
        ("Instagram", &contacts.instagram),
        ("WhatsApp", &contacts.whatsapp),
        ("Email", &contacts.email),
        ("X", &contacts.x),
    ];

    if contacts.is_empty() {
        md.push_str("_No contact links found._\n");
        return md;
    }

    for (label, value) in entries {
        if let Some(value) = value {
            md.push_str(&format!("- **{}**: <{}>\n", label, value));
        }
    }

    md
}

/// Escape characters that would otherwise start Markdown emphasis or links
fn escape_inline(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '*' | '_' | '`' | '[' | ']' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Markdown formatter with configurable options
pub struct MarkdownFormatter {
    config: MarkdownConfig,
}

impl MarkdownFormatter {
    pub fn new(config: MarkdownConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, report: &PageReport) -> String {
        convert_to_markdown(report, &self.config)
    }
}
