use url::Url;

/// Checks whether two URLs share an origin (scheme + host + port)
pub fn same_origin(a: &Url, b: &Url) -> bool {
    a.origin() == b.origin()
}
