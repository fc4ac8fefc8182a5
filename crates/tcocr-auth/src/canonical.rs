//! Canonical request construction for TC3-HMAC-SHA256.
//!
//! This module implements the canonical request format as specified by
//! Tencent Cloud:
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
//! Each canonical header line is `name:value` with a lowercase name and a
//! trailing newline of its own, so an empty line separates the header block
//! from the signed headers list. Components are normalized deterministically
//! so repeated signing of the same request yields the same bytes.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

/// Build the full canonical request string from its components.
///
/// # Examples
///
/// ```
/// use tcocr_auth::canonical::build_canonical_request;
///
/// let canonical = build_canonical_request(
///     "POST",
///     "/",
///     "",
///     &[("content-type", "application/json; charset=utf-8"), ("host", "ocr.tencentcloudapi.com")],
///     &["content-type", "host"],
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
/// );
/// assert!(canonical.starts_with("POST\n/\n\ncontent-type:"));
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
    let canonical_headers = build_canonical_headers(headers);
    let signed_headers_str = build_signed_headers_string(signed_headers);

    format!(
        "{method}\n{uri}\n{query_string}\n{canonical_headers}\n{signed_headers_str}\n{payload_hash}"
    )
}

/// Build the canonical headers block.
///
/// Header names are lowercased, values are trimmed, and headers are sorted by
/// name. Every line is terminated by a newline, including the last one.
///
/// # Examples
///
/// ```
/// use tcocr_auth::canonical::build_canonical_headers;
///
/// let block = build_canonical_headers(&[("Host", "ocr.tencentcloudapi.com")]);
/// assert_eq!(block, "host:ocr.tencentcloudapi.com\n");
/// ```
#[must_use]
pub fn build_canonical_headers(headers: &[(&str, &str)]) -> String {
    let sorted: BTreeMap<String, &str> = headers
        .iter()
        .map(|(name, value)| (name.to_lowercase(), value.trim()))
        .collect();

    sorted
        .iter()
        .map(|(name, value)| format!("{name}:{value}\n"))
        .collect()
}

/// Build the signed headers string as a semicolon-separated list of
/// lowercase header names, sorted lexicographically.
///
/// # Examples
///
/// ```
/// use tcocr_auth::canonical::build_signed_headers_string;
///
/// assert_eq!(
///     build_signed_headers_string(&["host", "content-type"]),
///     "content-type;host"
/// );
/// ```
#[must_use]
pub fn build_signed_headers_string(signed_headers: &[&str]) -> String {
    let mut sorted: Vec<String> = signed_headers.iter().map(|s| s.to_lowercase()).collect();
    sorted.sort_unstable();
    sorted.join(";")
}

/// Compute the SHA-256 hash of the given payload as lowercase hex.
///
/// # Examples
///
/// ```
/// use tcocr_auth::canonical::hash_payload;
///
/// // SHA-256 of the empty payload
/// assert_eq!(
///     hash_payload(b""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
#[must_use]
pub fn hash_payload(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}
