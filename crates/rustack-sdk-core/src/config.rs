//! Client configuration.
//!
//! Configuration covers where requests go and how they are identified. It
//! never carries credentials; those come from a credentials provider.

use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::types::Region;

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("rustack-sdk/", env!("CARGO_PKG_VERSION"));

/// Per-client configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Region used for endpoint resolution and the signing scope.
    pub region: Region,
    /// Explicit endpoint overriding the regional default.
    pub endpoint_url: Option<String>,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Upper bound for a single HTTP exchange, if any.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            endpoint_url: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `AWS_REGION` (falling back to `AWS_DEFAULT_REGION`) and
    /// `AWS_ENDPOINT_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("AWS_REGION").or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
        {
            config.region = Region::new(v);
        }
        if let Ok(v) = std::env::var("AWS_ENDPOINT_URL") {
            config.endpoint_url = Some(v);
        }

        config
    }

    /// Set the region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Region::new(region);
        self
    }

    /// Set an endpoint override.
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint.into());
        self
    }

    /// Set the `User-Agent` value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-exchange timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve the endpoint for a service.
    ///
    /// An explicit `endpoint_url` wins; otherwise the regional endpoint
    /// `https://{prefix}.{region}.amazonaws.com` is used. The returned value
    /// never ends with `/`.
    pub fn resolve_endpoint(&self, endpoint_prefix: &str) -> CoreResult<String> {
        let endpoint = match &self.endpoint_url {
            Some(url) => url.trim_end_matches('/').to_owned(),
            None => format!("https://{endpoint_prefix}.{}.amazonaws.com", self.region),
        };

        let uri: http::Uri = endpoint.parse().map_err(|e: http::uri::InvalidUri| {
            CoreError::InvalidEndpoint {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            }
        })?;
        if uri.scheme().is_none() || uri.host().is_none() {
            return Err(CoreError::InvalidEndpoint {
                endpoint,
                reason: "scheme and host are required".to_owned(),
            });
        }

        Ok(endpoint)
    }
}
