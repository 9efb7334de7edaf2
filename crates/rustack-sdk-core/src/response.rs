//! Response envelopes.

use std::collections::BTreeMap;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Header carrying the request id on JSON protocol responses.
pub const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Raw HTTP exchange result handed back by a transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Full response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a response.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Whether the status code denotes success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Look up a header value as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Service-assigned metadata accompanying every response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Request id assigned by the service.
    pub request_id: Option<String>,
    /// Any further identifiers the service returned.
    pub metadata: BTreeMap<String, String>,
}

impl ResponseMetadata {
    /// Metadata with only a request id.
    #[must_use]
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
            metadata: BTreeMap::new(),
        }
    }

    /// Request id, or an empty string if the service sent none.
    #[must_use]
    pub fn request_id(&self) -> &str {
        self.request_id.as_deref().unwrap_or_default()
    }
}

/// A typed result together with its response metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response<T> {
    result: T,
    metadata: ResponseMetadata,
    status: Option<StatusCode>,
}

impl<T> Response<T> {
    /// Create a response envelope.
    #[must_use]
    pub fn new(result: T, metadata: ResponseMetadata) -> Self {
        Self {
            result,
            metadata,
            status: None,
        }
    }

    /// Attach the HTTP status the result arrived with.
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// The typed result.
    #[must_use]
    pub fn result(&self) -> &T {
        &self.result
    }

    /// Response metadata.
    #[must_use]
    pub fn metadata(&self) -> &ResponseMetadata {
        &self.metadata
    }

    /// Request id shortcut.
    #[must_use]
    pub fn request_id(&self) -> &str {
        self.metadata.request_id()
    }

    /// HTTP status, when known.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Take the typed result, dropping metadata.
    #[must_use]
    pub fn into_result(self) -> T {
        self.result
    }

    /// Split into result and metadata.
    #[must_use]
    pub fn into_parts(self) -> (T, ResponseMetadata) {
        (self.result, self.metadata)
    }
}
