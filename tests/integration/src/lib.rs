//! End-to-end tests for the Rustack SDK.
//!
//! Every test runs a real client against [`FakeEndpoint`], an in-process
//! HTTP/1 server bound to an ephemeral localhost port that records each
//! request and answers with a canned response. No network access or AWS
//! account is needed.
//!
//! ```text
//! cargo test -p rustack-sdk-integration
//! ```

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, Once, PoisonError};
use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use rustack_sdk_auth::StaticCredentialsProvider;
use rustack_sdk_core::{ClientConfig, Credentials};
use rustack_sdk_elasticache::ElastiCacheClient;
use rustack_sdk_runtime::{ServiceClient, ServiceClientBuilder, ServiceMetadata};
use rustack_sdk_storagegateway::StorageGatewayClient;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A request as the fake endpoint received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP verb.
    pub method: Method,
    /// Path and query.
    pub uri: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Raw body.
    pub body: Bytes,
}

impl RecordedRequest {
    /// Form-decoded body parameter, for query-protocol requests.
    #[must_use]
    pub fn form_param(&self, name: &str) -> Option<String> {
        form_urlencoded::parse(&self.body)
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    /// Header value as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// What the fake endpoint answers with.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    status: StatusCode,
    headers: Vec<(&'static str, String)>,
    body: String,
    delay: Duration,
}

impl CannedResponse {
    /// A `200 OK` with the given body.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    /// A response with an arbitrary status.
    #[must_use]
    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    /// Add a response header.
    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Hold the response back for `delay`.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = dyn Fn(&RecordedRequest) -> CannedResponse + Send + Sync;

struct EndpointState {
    responder: Box<Responder>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process HTTP endpoint. The accept loop stops when this is dropped.
pub struct FakeEndpoint {
    addr: SocketAddr,
    state: Arc<EndpointState>,
    accept_loop: JoinHandle<()>,
}

impl std::fmt::Debug for FakeEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeEndpoint").field("addr", &self.addr).finish_non_exhaustive()
    }
}

impl FakeEndpoint {
    /// Bind to `127.0.0.1:0` and answer every request with `responder`.
    pub async fn start<F>(responder: F) -> anyhow::Result<Self>
    where
        F: Fn(&RecordedRequest) -> CannedResponse + Send + Sync + 'static,
    {
        init_tracing();
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(EndpointState {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        });

        let loop_state = Arc::clone(&state);
        let accept_loop = tokio::spawn(async move {
            loop {
                let stream = match listener.accept().await {
                    Ok((stream, _)) => stream,
                    Err(e) => {
                        warn!(error = %e, "fake endpoint failed to accept connection");
                        continue;
                    }
                };
                let state = Arc::clone(&loop_state);
                tokio::spawn(async move {
                    let svc = service_fn(move |req| handle(Arc::clone(&state), req));
                    if let Err(e) = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), svc)
                        .await
                    {
                        debug!(error = %e, "fake endpoint connection closed");
                    }
                });
            }
        });
        debug!(%addr, "fake endpoint listening");

        Ok(Self {
            addr,
            state,
            accept_loop,
        })
    }

    /// Base URL of the endpoint.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Client configuration pointing at this endpoint.
    #[must_use]
    pub fn config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_region("us-west-2")
            .with_endpoint_url(self.url())
            .with_timeout(Duration::from_secs(10))
    }

    /// Dispatcher builder for `metadata`, configured for this endpoint with
    /// test credentials.
    #[must_use]
    pub fn service_client(&self, metadata: ServiceMetadata) -> ServiceClientBuilder {
        ServiceClient::builder(metadata, Arc::new(test_credentials())).config(self.config())
    }

    /// ElastiCache client with the default signer.
    pub fn elasticache(&self) -> anyhow::Result<ElastiCacheClient> {
        Ok(ElastiCacheClient::new(self.config(), Arc::new(test_credentials()))?)
    }

    /// Storage Gateway client with the default signer.
    pub fn storagegateway(&self) -> anyhow::Result<StorageGatewayClient> {
        Ok(StorageGatewayClient::new(
            self.config(),
            Arc::new(test_credentials()),
        )?)
    }
}

impl Drop for FakeEndpoint {
    fn drop(&mut self) {
        self.accept_loop.abort();
    }
}

fn test_credentials() -> StaticCredentialsProvider {
    StaticCredentialsProvider::new(Credentials::new(
        "AKIDEXAMPLE",
        "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
    ))
}

async fn handle(
    state: Arc<EndpointState>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            warn!(error = %e, "fake endpoint failed to read request body");
            Bytes::new()
        }
    };
    let recorded = RecordedRequest {
        method: parts.method,
        uri: parts.uri.to_string(),
        headers: parts.headers,
        body,
    };

    let canned = (state.responder)(&recorded);
    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(recorded);

    if !canned.delay.is_zero() {
        tokio::time::sleep(canned.delay).await;
    }

    let mut response = Response::new(Full::new(Bytes::from(canned.body)));
    *response.status_mut() = canned.status;
    for (name, value) in canned.headers {
        if let Ok(value) = value.parse::<HeaderValue>() {
            response.headers_mut().insert(name, value);
        }
    }
    Ok(response)
}

mod test_cancellation;
mod test_elasticache;
mod test_faults;
mod test_signing;
mod test_storagegateway;
