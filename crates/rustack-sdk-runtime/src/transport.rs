//! HTTP transports.

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use rustack_sdk_core::{ClientConfig, HttpResponse};
use tracing::trace;

use crate::error::TransportError;

/// Sends one HTTP request and returns the complete response.
///
/// Implementations must not interpret the status code; error responses are
/// returned as `Ok` and handled by the dispatcher.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Perform the exchange.
    async fn send(&self, request: http::Request<Bytes>) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client honouring the configured timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::Client)?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn request_error(url: String, source: reqwest::Error) -> TransportError {
    if source.is_timeout() {
        TransportError::Timeout { url, source }
    } else {
        TransportError::Request { url, source }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: http::Request<Bytes>) -> Result<HttpResponse, TransportError> {
        let url = request.uri().to_string();
        let request = reqwest::Request::try_from(request)
            .map_err(|source| request_error(url.clone(), source))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|source| request_error(url.clone(), source))?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|source| request_error(url.clone(), source))?;

        trace!(%url, status = status.as_u16(), bytes = body.len(), "received response");
        Ok(HttpResponse::new(status, headers, body))
    }
}
