use crate::outline::ContentOutline;

/// Render the outline's page metadata as TOML key/value lines
///
/// Manual TOML serialization to avoid adding the toml crate dependency
pub fn outline_to_toml(outline: &ContentOutline) -> String {
    let mut toml = String::new();

    if let Some(title) = &outline.title {
        toml.push_str(&format!("title = {}\n", toml_escape_string(title)));
    }

    if let Some(description) = &outline.description {
        toml.push_str(&format!("description = {}\n", toml_escape_string(description)));
    }

    toml.push_str(&format!("source = {}\n", toml_escape_string(&outline.source)));
    toml.push_str(&format!("sections = {}\n", outline.sections.len()));

    toml
}

/// Quote a string as a TOML basic string
///
/// Control characters are not allowed raw, so every one of them is escaped.
pub(crate) fn toml_escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
