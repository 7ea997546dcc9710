//! Main extraction API.
//!
//! The entry point is [`Scraper`], along with convenience functions like
//! [`extract_contacts`] and [`extract_outline`] that use default settings.
//! Fetching is the only fallible step: once a page has been fetched, both
//! extractions always produce a value.
//!
//! # Example
//!
//! ```rust
//! use sitelift_core::Scraper;
//!
//! let html = r#"<h2>Services</h2><li>Fast</li><a href="https://wa.me/1555">Chat</a>"#;
//! let scraper = Scraper::new();
//!
//! let contacts = scraper.contacts_from_html(html);
//! assert_eq!(contacts.whatsapp.as_deref(), Some("https://wa.me/1555"));
//!
//! let outline = scraper.outline_from_html(html, "https://example.com");
//! assert_eq!(outline.sections[0].title, "Services");
//! ```

use crate::contacts::{ContactSet, classify_document};
use crate::fetch::FetchConfig;
#[cfg(feature = "fetch")]
use crate::fetch::fetch_url;
use crate::outline::{ContentOutline, OutlineConfig};
use crate::parse::Document;
#[cfg(feature = "fetch")]
use crate::FetchError;

/// Configuration for the [`Scraper`].
///
/// # Example
///
/// ```rust
/// use sitelift_core::ScraperConfig;
///
/// let config = ScraperConfig::builder()
///     .timeout(10)
///     .max_sections(5)
///     .build();
/// assert_eq!(config.fetch.timeout, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScraperConfig {
    /// Outbound fetch settings.
    pub fetch: FetchConfig,
    /// Outline caps and word gates.
    pub outline: OutlineConfig,
}

impl ScraperConfig {
    /// Creates a new builder for ScraperConfig.
    pub fn builder() -> ScraperConfigBuilder {
        ScraperConfigBuilder::new()
    }
}

/// Builder for ScraperConfig.
pub struct ScraperConfigBuilder {
    config: ScraperConfig,
}

impl ScraperConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ScraperConfig::default() }
    }

    /// Sets the fetch timeout in seconds.
    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.fetch.timeout = secs;
        self
    }

    /// Sets the User-Agent header sent with the fetch.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the maximum number of highlights.
    pub fn max_highlights(mut self, value: usize) -> Self {
        self.config.outline.max_highlights = value;
        self
    }

    /// Sets the maximum number of sections.
    pub fn max_sections(mut self, value: usize) -> Self {
        self.config.outline.max_sections = value;
        self
    }

    /// Sets the maximum number of points per section.
    pub fn max_points(mut self, value: usize) -> Self {
        self.config.outline.max_points = value;
        self
    }

    /// Replaces the whole outline configuration.
    pub fn outline(mut self, outline: OutlineConfig) -> Self {
        self.config.outline = outline;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ScraperConfig {
        self.config
    }
}

impl Default for ScraperConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches pages and extracts contacts or a content outline from them.
///
/// A `Scraper` holds only immutable configuration, so one instance can serve
/// any number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Scraper {
    config: ScraperConfig,
}

impl Scraper {
    /// Creates a new Scraper with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new Scraper with a custom configuration.
    pub fn with_config(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Classifies the anchors of an HTML string.
    pub fn contacts_from_html(&self, html: &str) -> ContactSet {
        classify_document(&Document::parse(html))
    }

    /// Builds the outline of an HTML string, echoing `source`.
    pub fn outline_from_html(&self, html: &str, source: &str) -> ContentOutline {
        ContentOutline::from_document(&Document::parse(html), source, &self.config.outline)
    }

    /// Fetches `url` and classifies its contact links.
    #[cfg(feature = "fetch")]
    pub async fn extract_contacts(&self, url: &str) -> Result<ContactSet, FetchError> {
        let html = fetch_url(url, &self.config.fetch).await?;
        let contacts = self.contacts_from_html(&html);
        tracing::debug!(url, found = !contacts.is_empty(), "extracted contacts");
        Ok(contacts)
    }

    /// Fetches `url` and builds its content outline.
    #[cfg(feature = "fetch")]
    pub async fn extract_outline(&self, url: &str) -> Result<ContentOutline, FetchError> {
        let html = fetch_url(url, &self.config.fetch).await?;
        let outline = self.outline_from_html(&html, url);
        tracing::debug!(
            url,
            highlights = outline.highlights.len(),
            sections = outline.sections.len(),
            "extracted outline"
        );
        Ok(outline)
    }
}

/// Classifies the anchors of an HTML string with defaults.
pub fn contacts_from_html(html: &str) -> ContactSet {
    Scraper::new().contacts_from_html(html)
}

/// Builds the outline of an HTML string with defaults.
pub fn outline_from_html(html: &str, source: &str) -> ContentOutline {
    Scraper::new().outline_from_html(html, source)
}

/// Fetches `url` and classifies its contact links with defaults.
#[cfg(feature = "fetch")]
pub async fn extract_contacts(url: &str) -> Result<ContactSet, FetchError> {
    Scraper::new().extract_contacts(url).await
}

/// Fetches `url` and builds its content outline with defaults.
#[cfg(feature = "fetch")]
pub async fn extract_outline(url: &str) -> Result<ContentOutline, FetchError> {
    Scraper::new().extract_outline(url).await
}
