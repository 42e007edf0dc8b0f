//! Canonical request construction for TC3-HMAC-SHA256.
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n
//! SignedHeaders\n
//! HashedRequestPayload
//! ```
//!
//! Canonical headers are `name:value\n` lines with both name and value
//! lowercased and trimmed, sorted by name. The query string is taken verbatim
//! from the request line; the client always sends it pre-sorted.

use std::collections::BTreeMap;

/// Build the full canonical request string from its components.
///
/// # Examples
///
/// ```
/// use tencentcloud_auth::canonical::build_canonical_request;
///
/// let canonical = build_canonical_request(
///     "POST",
///     "/",
///     "",
///     &[("content-type", "application/json; charset=utf-8"), ("host", "cvm.tencentcloudapi.com")],
///     &["content-type", "host"],
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
/// );
/// assert!(canonical.starts_with("POST\n/\n\ncontent-type:application/json; charset=utf-8\n"));
/// ```
#[must_use]
pub fn build_canonical_request(
    method: &str,
    uri: &str,
    query_string: &str,
    headers: &[(&str, &str)],
    signed_headers: &[&str],
    payload_hash: &str,
) -> String {
    let canonical_uri = build_canonical_uri(uri);
    let canonical_headers = build_canonical_headers(headers, signed_headers);
    let signed_headers_str = build_signed_headers_string(signed_headers);

    format!(
        "{method}\n{canonical_uri}\n{query_string}\n{canonical_headers}\n{signed_headers_str}\n{payload_hash}"
    )
}

/// Normalize the request path. Empty paths become `/`.
#[must_use]
pub fn build_canonical_uri(path: &str) -> String {
    if path.is_empty() {
        "/".to_owned()
    } else {
        path.to_owned()
    }
}

/// Build the canonical headers block.
///
/// Only headers listed in `signed_headers` are included. Each line is
/// `lowercase(name):lowercase(trim(value))\n`, sorted by name. Repeated
/// headers are joined with `,`.
#[must_use]
pub fn build_canonical_headers(headers: &[(&str, &str)], signed_headers: &[&str]) -> String {
    let mut selected: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for signed in signed_headers {
        let wanted = signed.to_ascii_lowercase();
        for (name, value) in headers {
            if name.eq_ignore_ascii_case(&wanted) {
                selected
                    .entry(wanted.clone())
                    .or_default()
                    .push(value.trim().to_ascii_lowercase());
            }
        }
    }

    let mut result = String::new();
    for (name, values) in &selected {
        result.push_str(name);
        result.push(':');
        result.push_str(&values.join(","));
        result.push('\n');
    }
    result
}

/// Build the `SignedHeaders` value: lowercase names, sorted, joined by `;`.
///
/// # Examples
///
/// ```
/// use tencentcloud_auth::canonical::build_signed_headers_string;
///
/// assert_eq!(build_signed_headers_string(&["Host", "content-type"]), "content-type;host");
/// ```
#[must_use]
pub fn build_signed_headers_string(signed_headers: &[&str]) -> String {
    let mut names: Vec<String> = signed_headers
        .iter()
        .map(|h| h.to_ascii_lowercase())
        .collect();
    names.sort();
    names.dedup();
    names.join(";")
}
