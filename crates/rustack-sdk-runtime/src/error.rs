//! Dispatcher error types.

use rustack_sdk_auth::AuthError;
use rustack_sdk_core::{CoreError, FaultCode, ServiceError};
use rustack_sdk_protocol::{MarshallError, UnmarshallError};

/// Failures of the HTTP exchange itself.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the response not received.
    #[error("request to {url} failed: {source}")]
    Request {
        /// Target URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// No response arrived within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// Target URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// A transport other than the default one failed.
    #[error("connection error: {0}")]
    Connection(String),

    /// The blocking runtime could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Failures while constructing a client.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The endpoint could not be resolved.
    #[error(transparent)]
    Config(#[from] CoreError),

    /// The default transport could not be created.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Outcome of a failed invocation.
///
/// Every failure a caller can see is one of these variants; raw parser or
/// client errors only appear as sources.
#[derive(Debug, thiserror::Error)]
pub enum SdkError<C: FaultCode> {
    /// The service answered with an error response.
    #[error(transparent)]
    Service(ServiceError<C>),

    /// The typed input could not be turned into a wire request.
    #[error("failed to marshall request: {0}")]
    Marshall(#[from] MarshallError),

    /// Credentials could not be resolved or the request not signed.
    #[error("failed to sign request: {0}")]
    Signing(#[from] AuthError),

    /// A successful response could not be decoded.
    #[error("failed to unmarshall response: {0}")]
    Deserialization(#[from] UnmarshallError),

    /// The HTTP exchange failed.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The caller cancelled the invocation before a response arrived.
    #[error("request cancelled")]
    Cancelled,
}

impl<C: FaultCode> From<ServiceError<C>> for SdkError<C> {
    fn from(err: ServiceError<C>) -> Self {
        Self::Service(err)
    }
}

impl<C: FaultCode> SdkError<C> {
    /// The service fault, if this is one.
    #[must_use]
    pub fn as_service_error(&self) -> Option<&ServiceError<C>> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the service reported the given fault.
    #[must_use]
    pub fn is_fault(&self, code: C) -> bool {
        self.as_service_error().is_some_and(|err| err.is(code))
    }

    /// Whether the invocation was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
