//! Sitemap XML parsing
//!
//! Parses the two sitemap document shapes: a `urlset` of page locations and a
//! `sitemapindex` pointing at further sitemap files. Parsing is best-effort; a
//! document that fits neither shape yields an empty page set.

use quick_xml::de::from_str;
use serde::Deserialize;

/// A parsed sitemap document
#[derive(Debug, PartialEq, Eq)]
pub enum SitemapFile {
    /// A `urlset` document: page URLs harvested from `<url><loc>` entries
    Pages(Vec<String>),

    /// A `sitemapindex` document: child sitemap URLs from `<sitemap><loc>` entries
    Index(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct UrlSet {
    #[serde(rename = "url", default)]
    entries: Vec<LocEntry>,
}

#[derive(Debug, Deserialize)]
struct SitemapIndex {
    #[serde(rename = "sitemap", default)]
    entries: Vec<LocEntry>,
}

#[derive(Debug, Deserialize)]
struct LocEntry {
    #[serde(default)]
    loc: Option<String>,
}

/// Parses sitemap XML into either a page set or an index
///
/// Handles both `<urlset>` and `<sitemapindex>` roots. `<loc>` values are
/// trimmed; entries without one are dropped. Malformed XML yields an empty
/// page set rather than an error.
pub fn parse_sitemap(xml: &str) -> SitemapFile {
    if xml.contains("<sitemapindex") {
        let index: SitemapIndex = match from_str(xml) {
            Ok(i) => i,
            Err(e) => {
                tracing::debug!("Failed to parse sitemap index: {}", e);
                return SitemapFile::Pages(Vec::new());
            }
        };
        SitemapFile::Index(collect_locs(index.entries))
    } else {
        let urlset: UrlSet = match from_str(xml) {
            Ok(u) => u,
            Err(e) => {
                tracing::debug!("Failed to parse urlset: {}", e);
                return SitemapFile::Pages(Vec::new());
            }
        };
        SitemapFile::Pages(collect_locs(urlset.entries))
    }
}

fn collect_locs(entries: Vec<LocEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|e| e.loc)
        .map(|loc| loc.trim().to_string())
        .filter(|loc| !loc.is_empty())
        .collect()
}
