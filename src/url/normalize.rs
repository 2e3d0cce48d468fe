use crate::UrlError;
use url::Url;

/// Normalizes a crawl-target URL into the canonical base used for a run
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed or non-HTTP(S)
/// 2. Remove the fragment
/// 3. Remove the query string
/// 4. Ensure the path ends with a trailing slash
///
/// The scheme, host, and port are kept as given; all same-origin comparisons
/// during the crawl are made against this base.
///
/// # Arguments
///
/// * `input` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(Url)` - Normalized base URL
/// * `Err(UrlError)` - Failed to parse or normalize the URL
///
/// # Examples
///
/// ```
/// use grace_crawler::url::normalize_base;
///
/// let base = normalize_base("https://example.com/docs?page=2#intro").unwrap();
/// assert_eq!(base.as_str(), "https://example.com/docs/");
/// ```
pub fn normalize_base(input: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(input).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);
    url.set_query(None);

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
