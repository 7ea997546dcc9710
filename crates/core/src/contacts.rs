//! Contact link classification.
//!
//! Every anchor href is tested against a fixed set of platform patterns. For
//! each category the first matching href in document order wins; later
//! matches are never considered, even if they look like a better fit.
//! Categories are independent, so one href can fill more than one field.

use serde::{Deserialize, Serialize};

use crate::parse::{MarkupNode, MarkupTree};

const INSTAGRAM_PATTERNS: &[&str] = &["instagram.com/"];
const WHATSAPP_PATTERNS: &[&str] = &["wa.me/", "api.whatsapp.com/", "whatsapp.com/send"];
const X_PATTERNS: &[&str] = &["twitter.com/", "x.com/"];
const MAILTO: &str = "mailto:";

/// Contact identifiers recovered from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSet {
    pub instagram: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub x: Option<String>,
}

impl ContactSet {
    /// Whether no category matched.
    pub fn is_empty(&self) -> bool {
        self.instagram.is_none() && self.whatsapp.is_none() && self.email.is_none() && self.x.is_none()
    }
}

/// Platform category an href can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Instagram,
    WhatsApp,
    Email,
    X,
}

impl ContactKind {
    pub const ALL: [ContactKind; 4] = [Self::Instagram, Self::WhatsApp, Self::Email, Self::X];

    /// Tests an already-lowercased href against this category.
    pub fn matches(self, lower: &str) -> bool {
        match self {
            Self::Instagram => INSTAGRAM_PATTERNS.iter().any(|p| lower.contains(p)),
            Self::WhatsApp => WHATSAPP_PATTERNS.iter().any(|p| lower.contains(p)),
            Self::Email => lower.starts_with(MAILTO),
            Self::X => X_PATTERNS.iter().any(|p| lower.contains(p)),
        }
    }
}

/// Classifies hrefs in the order given.
///
/// Hrefs are trimmed before matching and blank ones are skipped. Stored values
/// keep their original case; emails are normalized by [`normalize_email`].
pub fn classify_links<I, S>(hrefs: I) -> ContactSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut contacts = ContactSet::default();

    for href in hrefs {
        let href = href.as_ref().trim();
        if href.is_empty() {
            continue;
        }
        let lower = href.to_lowercase();

        for kind in ContactKind::ALL {
            let slot = match kind {
                ContactKind::Instagram => &mut contacts.instagram,
                ContactKind::WhatsApp => &mut contacts.whatsapp,
                ContactKind::Email => &mut contacts.email,
                ContactKind::X => &mut contacts.x,
            };
            if slot.is_none() && kind.matches(&lower) {
                *slot = Some(match kind {
                    ContactKind::Email => normalize_email(href),
                    _ => href.to_string(),
                });
            }
        }
    }

    contacts
}

/// Strips a case-insensitive `mailto:` prefix and anything from the first `?`.
pub fn normalize_email(href: &str) -> String {
    let address = match href.get(..MAILTO.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(MAILTO) => &href[MAILTO.len()..],
        _ => href,
    };
    address.split('?').next().unwrap_or_default().to_string()
}

/// Collects non-blank `href` values of every anchor, in document order.
pub fn collect_hrefs<T: MarkupTree>(tree: &T) -> Vec<String> {
    tree.elements("a[href]")
        .iter()
        .filter_map(|el| el.attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classifies every anchor of the document.
pub fn classify_document<T: MarkupTree>(tree: &T) -> ContactSet {
    classify_links(collect_hrefs(tree))
}
