//! HTML parsing behind a minimal capability interface.
//!
//! The extraction heuristics never touch `scraper` directly. They see a
//! document only through [`MarkupTree`] (enumerate elements matching a CSS
//! selector, in document order) and [`MarkupNode`] (tag name, attribute,
//! text content). [`Document`] is the `scraper`-backed implementation.
//!
//! # Example
//!
//! ```rust
//! use sitelift_core::parse::{Document, MarkupNode, MarkupTree};
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <a href="https://instagram.com/acme">Follow us</a>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let links = doc.elements("a[href]");
//! assert_eq!(links[0].attr("href"), Some("https://instagram.com/acme"));
//! ```

use scraper::{Html, Selector};

/// Read access to a single element.
pub trait MarkupNode {
    /// Lowercase tag name (e.g. `"h2"`, `"li"`).
    fn tag_name(&self) -> String;

    /// Value of the named attribute, if present.
    fn attr(&self, name: &str) -> Option<&str>;

    /// All descendant text nodes, in order, joined by a single space.
    ///
    /// The separator keeps words apart across `<br>` and nested elements;
    /// callers collapse the resulting whitespace themselves.
    fn text(&self) -> String;
}

/// Element enumeration over a parsed document.
pub trait MarkupTree {
    type Node<'a>: MarkupNode
    where
        Self: 'a;

    /// All elements matching `selector`, in document order.
    ///
    /// An invalid selector yields no elements rather than an error, so
    /// callers built on this trait stay total.
    fn elements<'a>(&'a self, selector: &str) -> Vec<Self::Node<'a>>;
}

/// Represents a parsed HTML document.
///
/// Parsing is infallible: html5ever recovers from any malformed input the
/// same way a browser would.
///
/// # Example
///
/// ```rust
/// use sitelift_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html);
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// Returns an empty list for an invalid selector.
    pub fn select(&'_ self, selector: &str) -> Vec<Element<'_>> {
        match Selector::parse(selector) {
            Ok(sel) => self.html.select(&sel).map(|el| Element { element: el }).collect(),
            Err(e) => {
                tracing::debug!(selector, error = %e, "ignoring invalid selector");
                Vec::new()
            }
        }
    }

    /// Gets the raw text of the first `<title>` element, if present.
    pub fn title(&self) -> Option<String> {
        self.select("title").first().map(|el| el.text())
    }
}

impl MarkupTree for Document {
    type Node<'a> = Element<'a>;

    fn elements<'a>(&'a self, selector: &str) -> Vec<Element<'a>> {
        self.select(selector)
    }
}

/// A wrapper around scraper's `ElementRef`.
///
/// # Example
///
/// ```rust
/// use sitelift_core::parse::{Document, MarkupNode};
///
/// let html = r#"<a href="mailto:hi@example.com">Mail</a>"#;
/// let doc = Document::parse(html);
/// let link = &doc.select("a")[0];
///
/// assert_eq!(link.text(), "Mail");
/// assert_eq!(link.attr("href"), Some("mailto:hi@example.com"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl MarkupNode for Element<'_> {
    fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    fn text(&self) -> String {
        self.element.text().collect::<Vec<_>>().join(" ")
    }
}
