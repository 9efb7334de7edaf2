//! The service client and its invocation pipeline.

use std::fmt;
use std::sync::Arc;

use rustack_sdk_auth::{ProvideCredentials, SigV4Signer, Signer, SigningContext};
use rustack_sdk_core::{ClientConfig, FaultCode, Response};
use rustack_sdk_protocol::unmarshall_fault;
use rustack_sdk_protocol::{MarshallError, Marshaller, ResponseUnmarshaller};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use crate::error::{BuildError, SdkError};
use crate::transport::{ReqwestTransport, Transport};

const INVOCATION_ID_HEADER: &str = "amz-sdk-invocation-id";

/// Static identity of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Service name used in wire requests and logs.
    pub service_name: &'static str,
    /// Name used in the signing scope.
    pub signing_name: &'static str,
    /// First label of the regional endpoint host.
    pub endpoint_prefix: &'static str,
}

/// Lifecycle phase of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The wire request was marshalled.
    Built,
    /// The request was signed.
    Signed,
    /// A response arrived.
    Sent,
    /// The response decoded into a typed result.
    Succeeded,
    /// The response mapped onto a typed fault.
    Faulted,
}

impl Phase {
    /// Lowercase name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Built => "built",
            Self::Signed => "signed",
            Self::Sent => "sent",
            Self::Succeeded => "succeeded",
            Self::Faulted => "faulted",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The marshaller and response unmarshaller of one operation.
///
/// Both are shared statics, so an `Operation` is itself usable as a
/// `static` or `const`.
pub struct Operation<I: 'static, O: 'static> {
    name: &'static str,
    marshaller: &'static dyn Marshaller<I>,
    unmarshaller: &'static dyn ResponseUnmarshaller<O>,
}

impl<I, O> Operation<I, O> {
    /// Pair a marshaller with its response unmarshaller.
    #[must_use]
    pub const fn new(
        name: &'static str,
        marshaller: &'static dyn Marshaller<I>,
        unmarshaller: &'static dyn ResponseUnmarshaller<O>,
    ) -> Self {
        Self {
            name,
            marshaller,
            unmarshaller,
        }
    }

    /// Operation name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<I, O> fmt::Debug for Operation<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Builder for [`ServiceClient`].
#[derive(Debug)]
pub struct ServiceClientBuilder {
    metadata: ServiceMetadata,
    config: ClientConfig,
    credentials: Arc<dyn ProvideCredentials>,
    signer: Option<Arc<dyn Signer>>,
    transport: Option<Arc<dyn Transport>>,
}

impl ServiceClientBuilder {
    /// Use a different configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different signer. Defaults to [`SigV4Signer`].
    #[must_use]
    pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Use a different transport. Defaults to [`ReqwestTransport`].
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Resolve the endpoint and create the client.
    pub fn build(self) -> Result<ServiceClient, BuildError> {
        let endpoint = self.config.resolve_endpoint(self.metadata.endpoint_prefix)?;
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };
        let signer: Arc<dyn Signer> = match self.signer {
            Some(signer) => signer,
            None => Arc::new(SigV4Signer::new()),
        };
        debug!(
            service = self.metadata.service_name,
            %endpoint,
            region = %self.config.region,
            signer = signer.name(),
            "created service client"
        );
        Ok(ServiceClient {
            inner: Arc::new(ClientInner {
                metadata: self.metadata,
                config: self.config,
                endpoint,
                credentials: self.credentials,
                signer,
                transport,
            }),
        })
    }
}

#[derive(Debug)]
struct ClientInner {
    metadata: ServiceMetadata,
    config: ClientConfig,
    endpoint: String,
    credentials: Arc<dyn ProvideCredentials>,
    signer: Arc<dyn Signer>,
    transport: Arc<dyn Transport>,
}

/// Shared dispatcher behind every generated service client.
///
/// Cheap to clone; clones share configuration, credentials, signer and
/// transport. Invocations hold no shared mutable state and may run
/// concurrently.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    inner: Arc<ClientInner>,
}

impl ServiceClient {
    /// Start building a client for `metadata` with the given credentials.
    #[must_use]
    pub fn builder(
        metadata: ServiceMetadata,
        credentials: Arc<dyn ProvideCredentials>,
    ) -> ServiceClientBuilder {
        ServiceClientBuilder {
            metadata,
            config: ClientConfig::default(),
            credentials,
            signer: None,
            transport: None,
        }
    }

    /// Service identity.
    #[must_use]
    pub fn metadata(&self) -> &ServiceMetadata {
        &self.inner.metadata
    }

    /// Client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Resolved endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Run one operation.
    ///
    /// When `cancel` fires before the response arrives the exchange is
    /// abandoned and the call resolves to [`SdkError::Cancelled`].
    pub async fn invoke<I, O, C>(
        &self,
        input: &I,
        operation: &Operation<I, O>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Response<O>, SdkError<C>>
    where
        C: FaultCode,
    {
        let inner = &*self.inner;
        let service = inner.metadata.service_name;
        let op = operation.name;
        let invocation_id = Uuid::new_v4().to_string();

        let mut request = operation.marshaller.marshall(input)?;
        request
            .set_endpoint(inner.endpoint.as_str())
            .map_err(MarshallError::from)?;
        request
            .set_header("user-agent", &inner.config.user_agent)
            .map_err(MarshallError::from)?;
        request
            .set_header(INVOCATION_ID_HEADER, &invocation_id)
            .map_err(MarshallError::from)?;
        debug!(service, operation = op, phase = %Phase::Built, %invocation_id, "request built");

        let credentials = inner.credentials.provide_credentials()?;
        let context = SigningContext::now(inner.config.region.clone(), inner.metadata.signing_name);
        let signed = inner.signer.sign(request, &credentials, &context)?;
        let http_request = signed.to_http_request().map_err(MarshallError::from)?;
        debug!(
            service,
            operation = op,
            phase = %Phase::Signed,
            signer = inner.signer.name(),
            "request signed"
        );

        let exchange = inner.transport.send(http_request);
        let response = match cancel {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!(service, operation = op, %invocation_id, "request cancelled");
                    return Err(SdkError::Cancelled);
                }
                response = exchange => response?,
            },
            None => exchange.await?,
        };
        debug!(
            service,
            operation = op,
            phase = %Phase::Sent,
            status = response.status.as_u16(),
            "response received"
        );

        if response.is_success() {
            let decoded = operation.unmarshaller.unmarshall(&response)?;
            debug!(
                service,
                operation = op,
                phase = %Phase::Succeeded,
                request_id = decoded.request_id(),
                "response decoded"
            );
            Ok(decoded)
        } else {
            let fault: rustack_sdk_core::ServiceError<C> =
                unmarshall_fault(operation.unmarshaller, &response);
            debug!(
                service,
                operation = op,
                phase = %Phase::Faulted,
                status = response.status.as_u16(),
                code = fault.raw_code(),
                request_id = fault.request_id().unwrap_or_default(),
                "service returned a fault"
            );
            Err(SdkError::Service(fault))
        }
    }
}
