use crate::contacts::ContactSet;
use crate::formatters::PageReport;
use crate::outline::ContentOutline;

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Wrap subtitles and points at specified width (0 = no wrapping)
    pub line_width: usize,
}

/// Plain text formatter
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, report: &PageReport) -> String {
        convert_to_text(report, &self.config)
    }
}

/// Render a report as plain text
pub fn convert_to_text(report: &PageReport, config: &TextConfig) -> String {
    let mut parts = Vec::new();

    if let Some(outline) = &report.outline {
        parts.push(outline_to_text(outline, config));
    }

    if let Some(contacts) = &report.contacts {
        parts.push(contacts_to_text(contacts));
    }

    parts.join("\n\n").trim().to_string()
}

fn outline_to_text(outline: &ContentOutline, config: &TextConfig) -> String {
    let mut blocks = Vec::new();

    if let Some(title) = &outline.title {
        blocks.push(underline(title, '='));
    }

    if let Some(description) = &outline.description {
        blocks.push(wrap_text(description, config.line_width));
    }

    for section in &outline.sections {
        let mut block = underline(&section.title, '-');
        if let Some(subtitle) = &section.subtitle {
            block.push('\n');
            block.push_str(&wrap_text(subtitle, config.line_width));
        }
        for point in &section.points {
            block.push_str("\n* ");
            block.push_str(&indent_continuation(&wrap_text(point, config.line_width.saturating_sub(2)), "  "));
        }
        blocks.push(block);
    }

    blocks.join("\n\n")
}

fn contacts_to_text(contacts: &ContactSet) -> String {
    let entries = [
        ("instagram", &contacts.instagram),
        ("whatsapp", &contacts.whatsapp),
        ("email", &contacts.email),
        ("x", &contacts.x),
    ];

    entries
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value.as_deref().unwrap_or("-")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Title followed by a line of `marker` of the same display width
fn underline(title: &str, marker: char) -> String {
    format!("{}\n{}", title, marker.to_string().repeat(title.chars().count()))
}

fn indent_continuation(text: &str, indent: &str) -> String {
    text.lines().collect::<Vec<_>>().join(&format!("\n{}", indent))
}

/// Greedy word wrap; `width == 0` disables wrapping
fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut result = Vec::new();
    let mut current_line = String::new();
    let mut current_length = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push_str(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_line.push(' ');
            current_line.push_str(word);
            current_length += 1 + word_len;
        } else {
            result.push(current_line);
            current_line = word.to_string();
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        result.push(current_line);
    }

    result.join("\n")
}
