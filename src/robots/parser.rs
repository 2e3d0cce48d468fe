//! Robots.txt parser
//!
//! Implements the deliberately small subset of robots.txt the crawler honors:
//! `Disallow` path prefixes from `User-agent: *` blocks, plus `Sitemap`
//! directives. `Allow` overrides, pattern wildcards, and named-agent blocks are
//! ignored.

/// Rules extracted from a robots.txt file
///
/// An empty `disallow` list means the crawl is unrestricted by robots rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsRules {
    /// Path prefixes that must not be fetched
    pub disallow: Vec<String>,

    /// Sitemap URLs declared anywhere in the file
    pub sitemaps: Vec<String>,
}

impl RobotsRules {
    /// Returns true if the given URL path starts with any disallowed prefix
    pub fn is_disallowed(&self, path: &str) -> bool {
        self.disallow.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}

/// Parses robots.txt content into [`RobotsRules`]
///
/// Scans line by line, skipping blanks and `#` comments, splitting each
/// directive on the first colon. Directive keys match case-insensitively;
/// values are taken as written. A `User-agent` line sets the "applies" state:
/// true only for the literal value `*`, false for any other agent. `Disallow`
/// lines with a non-empty value are collected while "applies" is true, so two
/// separate wildcard blocks both contribute and a named-agent block between
/// them only suspends collection. `Sitemap` is a global directive and is
/// collected regardless of the current block.
pub fn parse_robots(text: &str) -> RobotsRules {
    let mut rules = RobotsRules::default();
    let mut applies = false;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();

        match key.as_str() {
            "user-agent" => applies = value == "*",
            "disallow" if applies && !value.is_empty() => rules.disallow.push(value.to_string()),
            "sitemap" if !value.is_empty() => rules.sitemaps.push(value.to_string()),
            _ => {}
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_block_collects_prefixes() {
        let rules = parse_robots("User-agent: *\nDisallow: /private\nDisallow: /tmp");
        assert_eq!(rules.disallow, vec!["/private", "/tmp"]);
    }

    #[test]
    fn test_named_agent_block_ignored() {
        let rules = parse_robots("User-agent: Googlebot\nDisallow: /private");
        assert!(rules.disallow.is_empty());
    }

    #[test]
    fn test_named_block_resets_applies() {
        let text = "User-agent: *\nDisallow: /a\nUser-agent: Googlebot\nDisallow: /b";
        let rules = parse_robots(text);
        assert_eq!(rules.disallow, vec!["/a"]);
    }

    #[test]
    fn test_separate_wildcard_blocks_both_contribute() {
        let text = "User-agent: *\nDisallow: /a\n\nUser-agent: Googlebot\nDisallow: /b\n\nUser-agent: *\nDisallow: /c";
        let rules = parse_robots(text);
        assert_eq!(rules.disallow, vec!["/a", "/c"]);
    }

    #[test]
    fn test_directive_keys_case_insensitive() {
        let rules = parse_robots("USER-AGENT: *\nDISALLOW: /admin");
        assert_eq!(rules.disallow, vec!["/admin"]);
    }

    #[test]
    fn test_agent_value_case_sensitive() {
        // Only the literal "*" applies; "*" is not matched loosely.
        let rules = parse_robots("User-agent: Wildcard\nDisallow: /x");
        assert!(rules.disallow.is_empty());
    }

    #[test]
    fn test_empty_disallow_ignored() {
        let rules = parse_robots("User-agent: *\nDisallow:");
        assert!(rules.disallow.is_empty());
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let text = "# crawl rules\n\nUser-agent: *\n# keep out\nDisallow: /secret\n";
        let rules = parse_robots(text);
        assert_eq!(rules.disallow, vec!["/secret"]);
    }

    #[test]
    fn test_sitemap_collected_outside_blocks() {
        let text = "Sitemap: https://example.com/sitemap.xml\nUser-agent: Googlebot\nSitemap: https://example.com/other.xml";
        let rules = parse_robots(text);
        assert_eq!(
            rules.sitemaps,
            vec![
                "https://example.com/sitemap.xml",
                "https://example.com/other.xml"
            ]
        );
    }

    #[test]
    fn test_sitemap_value_keeps_full_url() {
        // Splitting on the first colon must not truncate the scheme separator.
        let rules = parse_robots("Sitemap: https://example.com/sitemap.xml");
        assert_eq!(rules.sitemaps, vec!["https://example.com/sitemap.xml"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let rules = parse_robots("User-agent: *\r\nDisallow: /admin\r\n");
        assert_eq!(rules.disallow, vec!["/admin"]);
    }

    #[test]
    fn test_garbage_lines_skipped() {
        let rules = parse_robots("this is not a directive\nUser-agent: *\nDisallow: /a");
        assert_eq!(rules.disallow, vec!["/a"]);
    }

    #[test]
    fn test_is_disallowed_prefix_match() {
        let rules = parse_robots("User-agent: *\nDisallow: /admin");
        assert!(rules.is_disallowed("/admin"));
        assert!(rules.is_disallowed("/admin/users"));
        assert!(!rules.is_disallowed("/public"));
    }

    #[test]
    fn test_empty_rules_allow_everything() {
        let rules = RobotsRules::default();
        assert!(!rules.is_disallowed("/anything"));
    }
}
