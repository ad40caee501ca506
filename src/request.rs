//! Request description and URL query parsing.

use std::collections::BTreeMap;

use http::Method;

/// Description of the HTTP request being signed.
///
/// The request is consumed read-only; signing produces a parameter set that
/// the caller attaches to the outgoing request itself. `url` is passed
/// through as given - no validation is performed on it, and a malformed URL
/// simply yields the signature a server would derive for that same string.
#[derive(Debug, Clone)]
pub struct SignableRequest {
    /// HTTP method.
    pub method: Method,
    /// Request URL, which may carry a query string.
    pub url: String,
    /// Body or additional parameters to include in the signature.
    pub data: Vec<(String, String)>,
}

impl SignableRequest {
    /// Create a request description without body data.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            data: Vec::new(),
        }
    }

    /// Append a body/form parameter.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }

    /// The URL with any query string stripped; the exact form used in the
    /// base string.
    pub(crate) fn base_url(&self) -> &str {
        match self.url.split_once('?') {
            Some((base, _)) => base,
            None => self.url.as_str(),
        }
    }

    /// Query parameters parsed out of the URL.
    pub(crate) fn query_params(&self) -> BTreeMap<String, String> {
        canonical_query_params(&self.url)
    }
}

/// Parse the query portion of a URL into decoded key/value pairs.
///
/// The query is everything after the first `?`. Pairs are split on `&` and
/// the first `=`, then percent-decoded (`+` decodes to a space); a key
/// without `=` yields an empty value and a duplicated key keeps its last
/// occurrence. A URL without a query string yields an empty mapping.
pub fn canonical_query_params(url: &str) -> BTreeMap<String, String> {
    match url.split_once('?') {
        Some((_, query)) => form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
        None => BTreeMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entries(url: &str) -> Vec<(String, String)> {
        canonical_query_params(url).into_iter().collect()
    }

    #[test]
    fn test_query_params_sorted_pairs() {
        assert_eq!(
            entries("https://x.com/r?b=2&a=1"),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_query_params_absent() {
        assert_eq!(entries("https://x.com/r"), vec![]);
        assert_eq!(entries("https://x.com/r?"), vec![]);
    }

    #[test]
    fn test_query_params_decoded_once() {
        assert_eq!(
            entries("https://x.com/r?q=a%20b&p=1+2"),
            vec![
                ("p".to_string(), "1 2".to_string()),
                ("q".to_string(), "a b".to_string())
            ]
        );
    }

    #[test]
    fn test_query_params_key_without_value() {
        assert_eq!(
            entries("https://x.com/r?flag"),
            vec![("flag".to_string(), String::new())]
        );
    }

    #[test]
    fn test_query_params_duplicate_key_keeps_last() {
        assert_eq!(
            entries("https://x.com/r?a=1&a=2"),
            vec![("a".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn test_base_url_strips_query() {
        let req = SignableRequest::new(Method::GET, "https://x.com/r?b=2&a=1");
        assert_eq!(req.base_url(), "https://x.com/r");

        let req = SignableRequest::new(Method::GET, "https://x.com/r");
        assert_eq!(req.base_url(), "https://x.com/r");
    }
}
