//! HTML parsing: link extraction and selector-driven content picking
//!
//! Link extraction returns raw `href` values; turning them into crawlable
//! absolute URLs is done by [`resolve_link`] against the page's final URL.

use crate::config::PickMode;
use crate::crawler::fetcher::Page;
use scraper::{Html, Selector};
use url::Url;

/// Produces the outbound link targets of a fetched page
pub trait LinkExtractor: Send + Sync {
    /// Returns raw href values in document order
    fn extract_links(&self, page: &Page) -> Vec<String>;
}

/// Extracts the `href` of every `<a>` element
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, page: &Page) -> Vec<String> {
        extract_hrefs(&page.body)
    }
}

/// Returns the `href` attribute of every `<a>` element, in document order
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel:, data: schemes
/// - fragment-only links (same page anchors)
/// - invalid URLs
/// - non-HTTP(S) URLs after resolution
///
/// Protocol-relative hrefs (`//host/path`) take the base URL's scheme. The
/// fragment of a resolved link is dropped; nothing else is normalized.
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    let mut absolute = base_url.join(href).ok()?;
    if absolute.scheme() != "http" && absolute.scheme() != "https" {
        return None;
    }
    absolute.set_fragment(None);

    Some(absolute.to_string())
}

/// Picks values out of a document with a CSS selector, in document order
///
/// `Text` yields each element's concatenated descendant text. `Attr` yields
/// the attribute value, or an empty string when the element lacks it.
pub fn pick_content(html: &str, selector: &Selector, mode: &PickMode) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(selector)
        .map(|element| match mode {
            PickMode::Text => element.text().collect::<String>(),
            PickMode::Attr(name) => element.value().attr(name).unwrap_or_default().to_string(),
        })
        .collect()
}
