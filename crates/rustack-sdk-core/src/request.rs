//! Wire-ready requests.
//!
//! A [`WireRequest`] is what a marshaller produces: routing metadata,
//! ordered form parameters or a raw body, headers and a resource path. The
//! dispatcher owns it for the duration of one call. Once a signer has run,
//! it is wrapped in a [`SignedRequest`], which only exposes read access.

use std::fmt;

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::{CoreError, CoreResult};

/// Characters left unencoded in query parameters (RFC 3986 unreserved).
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Content type of form-encoded query protocol bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// HTTP verb of a wire request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    #[default]
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
}

impl HttpMethod {
    /// The verb as it appears on the request line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
        }
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
            HttpMethod::Head => Self::HEAD,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered name/value parameters.
///
/// Insertion order is kept so that routing parameters (`Action`,
/// `Version`) lead. Setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(Vec<(String, String)>);

impl Parameters {
    /// Create an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Look up a parameter value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Percent-encode the parameters in insertion order as `a=1&b=2`.
    #[must_use]
    pub fn to_encoded_string(&self) -> String {
        encode_pairs(self.iter())
    }

    /// Percent-encode the parameters sorted by name, as required when the
    /// string takes part in a signature.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = self.iter().collect();
        pairs.sort_unstable();
        encode_pairs(pairs.into_iter())
    }
}

fn encode_pairs<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .map(|(n, v)| format!("{}={}", percent_encode(n), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-encode a string using the RFC 3986 unreserved set.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET).to_string()
}

/// A marshalled, not yet signed, request.
#[derive(Debug, Clone)]
pub struct WireRequest {
    service_name: &'static str,
    method: HttpMethod,
    resource_path: String,
    endpoint: Option<String>,
    parameters: Parameters,
    headers: HeaderMap,
    content: Option<Bytes>,
}

impl WireRequest {
    /// Create a `POST /` request for the given service.
    #[must_use]
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            method: HttpMethod::Post,
            resource_path: "/".to_owned(),
            endpoint: None,
            parameters: Parameters::new(),
            headers: HeaderMap::new(),
            content: None,
        }
    }

    /// Target service identifier.
    #[must_use]
    pub fn service_name(&self) -> &'static str {
        self.service_name
    }

    /// HTTP verb.
    #[must_use]
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Set the HTTP verb.
    pub fn set_method(&mut self, method: HttpMethod) {
        self.method = method;
    }

    /// Resource path, always starting with `/`.
    #[must_use]
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// Set the resource path.
    pub fn set_resource_path(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.resource_path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
    }

    /// Resolved endpoint (`scheme://host[:port]`), once the dispatcher set it.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Set the resolved endpoint and the matching `Host` header.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) -> CoreResult<()> {
        let endpoint = endpoint.into();
        let uri: http::Uri = endpoint.parse().map_err(|e: http::uri::InvalidUri| {
            CoreError::InvalidEndpoint {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            }
        })?;
        let authority = uri
            .authority()
            .ok_or_else(|| CoreError::InvalidEndpoint {
                endpoint: endpoint.clone(),
                reason: "missing host".to_owned(),
            })?
            .to_string();
        self.set_header(http::header::HOST.as_str(), &authority)?;
        self.endpoint = Some(endpoint);
        Ok(())
    }

    /// Form parameters.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Mutable access to the form parameters.
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Look up a header value as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Set a header, replacing any existing value.
    pub fn set_header(&mut self, name: &str, value: &str) -> CoreResult<()> {
        let invalid = || CoreError::InvalidHeader {
            name: name.to_owned(),
        };
        let name = HeaderName::try_from(name).map_err(|_| invalid())?;
        let value = HeaderValue::try_from(value).map_err(|_| invalid())?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// Raw body bytes for document-bodied protocols.
    #[must_use]
    pub fn content(&self) -> Option<&Bytes> {
        self.content.as_ref()
    }

    /// Set the raw body.
    pub fn set_content(&mut self, content: impl Into<Bytes>) {
        self.content = Some(content.into());
    }

    /// Whether the parameters travel in a form-encoded body rather than the
    /// query string.
    #[must_use]
    pub fn parameters_in_body(&self) -> bool {
        self.content.is_none() && self.method == HttpMethod::Post
    }

    /// Query string to append to the resource path (without `?`).
    #[must_use]
    pub fn query_string(&self) -> String {
        if self.parameters_in_body() {
            String::new()
        } else {
            self.parameters.to_encoded_string()
        }
    }

    /// Body bytes as they go on the wire.
    #[must_use]
    pub fn payload(&self) -> Bytes {
        match &self.content {
            Some(content) => content.clone(),
            None if self.parameters_in_body() => {
                Bytes::from(self.parameters.to_encoded_string())
            }
            None => Bytes::new(),
        }
    }
}

/// A request a signer has processed; it can no longer be modified.
#[derive(Debug, Clone)]
pub struct SignedRequest(WireRequest);

impl SignedRequest {
    /// Seal a request. Called by signers once they are done.
    #[must_use]
    pub fn new(request: WireRequest) -> Self {
        Self(request)
    }

    /// Read access to the sealed request.
    #[must_use]
    pub fn request(&self) -> &WireRequest {
        &self.0
    }

    /// Full URI: endpoint, resource path and query string.
    #[must_use]
    pub fn uri(&self) -> String {
        let endpoint = self.0.endpoint().unwrap_or_default();
        let query = self.0.query_string();
        if query.is_empty() {
            format!("{endpoint}{}", self.0.resource_path())
        } else {
            format!("{endpoint}{}?{query}", self.0.resource_path())
        }
    }

    /// Build the `http::Request` that goes on the wire.
    pub fn to_http_request(&self) -> CoreResult<http::Request<Bytes>> {
        let uri = self.uri();
        let parsed: http::Uri = uri.parse().map_err(|e: http::uri::InvalidUri| {
            CoreError::InvalidEndpoint {
                endpoint: uri.clone(),
                reason: e.to_string(),
            }
        })?;
        let mut request = http::Request::new(self.0.payload());
        *request.method_mut() = self.0.method().into();
        *request.uri_mut() = parsed;
        *request.headers_mut() = self.0.headers().clone();
        Ok(request)
    }
}
