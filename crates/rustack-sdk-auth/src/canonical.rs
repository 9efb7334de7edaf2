//! Canonical request construction for Signature Version 4.
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use sha2::{Digest, Sha256};

/// Characters that stay unencoded in path segments (RFC 3986 unreserved).
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Headers never included in a signature.
const UNSIGNED_HEADERS: &[&str] = &[
    "authorization",
    "user-agent",
    "x-amzn-trace-id",
    "expect",
    "amz-sdk-invocation-id",
];

/// The pieces of a canonical request, ready to render and hash.
#[derive(Debug, Clone)]
pub struct CanonicalRequest {
    method: String,
    uri: String,
    query: String,
    headers: BTreeMap<String, String>,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Collect the canonical form of a request.
    ///
    /// `query` must already be canonical (sorted, RFC 3986 encoded). Header
    /// names are lowercased, values trimmed with inner whitespace collapsed
    /// and repeated headers joined with `,`.
    #[must_use]
    pub fn new<'a>(
        method: &str,
        path: &str,
        query: &str,
        headers: impl IntoIterator<Item = (&'a str, &'a str)>,
        payload_hash: &str,
    ) -> Self {
        let mut header_map: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in headers {
            let name = name.to_ascii_lowercase();
            if UNSIGNED_HEADERS.contains(&name.as_str()) {
                continue;
            }
            let value = collapse_whitespace(value.trim());
            header_map
                .entry(name)
                .and_modify(|existing| {
                    existing.push(',');
                    existing.push_str(&value);
                })
                .or_insert(value);
        }

        Self {
            method: method.to_owned(),
            uri: canonical_uri(path),
            query: query.to_owned(),
            headers: header_map,
            payload_hash: payload_hash.to_owned(),
        }
    }

    /// Semicolon-separated, sorted list of signed header names.
    #[must_use]
    pub fn signed_headers(&self) -> String {
        self.headers.keys().map(String::as_str).collect::<Vec<_>>().join(";")
    }

    /// Render the canonical request.
    #[must_use]
    pub fn render(&self) -> String {
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| format!("{name}:{value}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{}\n{}\n{}\n{headers}\n\n{}\n{}",
            self.method,
            self.uri,
            self.query,
            self.signed_headers(),
            self.payload_hash
        )
    }

    /// Hex SHA-256 of the rendered canonical request.
    #[must_use]
    pub fn hash(&self) -> String {
        hex::encode(Sha256::digest(self.render().as_bytes()))
    }
}

/// Canonical URI: every path segment percent-encoded, `/` kept.
///
/// Segments are decoded first so an already-encoded path is not encoded twice.
#[must_use]
pub fn canonical_uri(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_owned();
    }

    path.split('/')
        .map(|segment| {
            let decoded = percent_decode_str(segment).decode_utf8_lossy();
            utf8_percent_encode(&decoded, URI_ENCODE_SET).to_string()
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
