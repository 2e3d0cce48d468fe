//! HTML parsing for metadata and link extraction
//!
//! One parse of a fetched document produces both the page's metadata record
//! and the outgoing links to feed back into the frontier. Extraction is pure
//! and best-effort: malformed HTML never fails, it just yields fewer fields.

use crate::crawler::{Headings, PageRecord};
use scraper::{Html, Selector};
use url::Url;

/// Extracted information from one HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page's metadata record
    pub record: PageRecord,

    /// Absolute same-document-resolved links found in anchors
    pub links: Vec<Url>,
}

/// Parses an HTML document into a metadata record plus outgoing links
///
/// Metadata fields:
/// - `title`: text of the first `<title>`, trimmed, absent if empty
/// - `description`: `content` of `<meta name="description">`, trimmed, absent if empty
/// - `headings.h1`: text of the first `<h1>`, trimmed, absent if empty
/// - `headings.h2`: text of every `<h2>` in document order, empty strings excluded
///
/// Links come from `a[href]` elements, resolved against `page_url`. Hrefs that
/// fail to resolve, or resolve to a non-HTTP(S) scheme, are skipped.
pub fn parse_page(page_url: &Url, html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    let record = PageRecord {
        url: page_url.to_string(),
        title: select_first_text(&document, "title"),
        description: select_meta_description(&document),
        headings: Headings {
            h1: select_first_text(&document, "h1"),
            h2: select_all_text(&document, "h2"),
        },
    };

    let links = extract_links(&document, page_url);

    ParsedPage { record, links }
}

/// Trimmed text of the first element matching `selector`, None if absent or empty
fn select_first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn select_meta_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Trimmed text of every element matching `selector`, empty strings excluded
fn select_all_text(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

fn extract_links(document: &Html, page_url: &Url) -> Vec<Url> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, page_url))
        .collect()
}

/// Resolves an href against the page URL, keeping HTTP(S) links only
fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let absolute = page_url.join(href).ok()?;
    match absolute.scheme() {
        "http" | "https" => Some(absolute),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/docs/").unwrap()
    }

    fn parse(html: &str) -> ParsedPage {
        parse_page(&page_url(), html)
    }

    #[test]
    fn test_extract_title() {
        let parsed = parse("<html><head><title>  Grace Docs  </title></head><body></body></html>");
        assert_eq!(parsed.record.title, Some("Grace Docs".to_string()));
    }

    #[test]
    fn test_missing_title() {
        let parsed = parse("<html><head></head><body></body></html>");
        assert_eq!(parsed.record.title, None);
    }

    #[test]
    fn test_empty_title_is_absent() {
        let parsed = parse("<html><head><title>   </title></head><body></body></html>");
        assert_eq!(parsed.record.title, None);
    }

    #[test]
    fn test_first_title_wins() {
        let parsed = parse("<title>First</title><title>Second</title>");
        assert_eq!(parsed.record.title, Some("First".to_string()));
    }

    #[test]
    fn test_meta_description() {
        let parsed =
            parse(r#"<head><meta name="description" content=" SEO overview page "></head>"#);
        assert_eq!(
            parsed.record.description,
            Some("SEO overview page".to_string())
        );
    }

    #[test]
    fn test_meta_description_absent() {
        let parsed = parse(r#"<head><meta name="keywords" content="a,b"></head>"#);
        assert_eq!(parsed.record.description, None);
    }

    #[test]
    fn test_first_h1() {
        let parsed = parse("<body><h1>Main</h1><h1>Other</h1></body>");
        assert_eq!(parsed.record.headings.h1, Some("Main".to_string()));
    }

    #[test]
    fn test_h2_document_order_and_empty_excluded() {
        let parsed = parse("<body><h2>One</h2><h2>  </h2><h2>Two</h2></body>");
        assert_eq!(parsed.record.headings.h2, vec!["One", "Two"]);
    }

    #[test]
    fn test_nested_heading_text_flattened() {
        let parsed = parse("<h1>Grace <em>Dashboard</em></h1>");
        assert_eq!(parsed.record.headings.h1, Some("Grace Dashboard".to_string()));
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let parsed = parse("<html><title>Broken<h1>Still here</body></div>");
        assert_eq!(parsed.record.url, "https://example.com/docs/");
    }

    #[test]
    fn test_relative_link_resolved() {
        let parsed = parse(r#"<a href="guide">Guide</a>"#);
        assert_eq!(parsed.links[0].as_str(), "https://example.com/docs/guide");
    }

    #[test]
    fn test_root_relative_link_resolved() {
        let parsed = parse(r#"<a href="/pricing">Pricing</a>"#);
        assert_eq!(parsed.links[0].as_str(), "https://example.com/pricing");
    }

    #[test]
    fn test_absolute_link_kept() {
        let parsed = parse(r#"<a href="https://other.com/page">Other</a>"#);
        assert_eq!(parsed.links[0].as_str(), "https://other.com/page");
    }

    #[test]
    fn test_fragment_only_link_skipped() {
        let parsed = parse(r##"<a href="#section">Jump</a>"##);
        assert!(parsed.links.is_empty());
    }

    #[test]
    fn test_mailto_and_javascript_skipped() {
        let parsed = parse(
            r#"<a href="mailto:team@example.com">Mail</a><a href="javascript:void(0)">JS</a>"#,
        );
        assert!(parsed.links.is_empty());
    }

    #[test]
    fn test_multiple_links_in_order() {
        let parsed = parse(r#"<a href="/a">A</a><a href="/b">B</a>"#);
        let links: Vec<&str> = parsed.links.iter().map(Url::as_str).collect();
        assert_eq!(links, vec!["https://example.com/a", "https://example.com/b"]);
    }
}
