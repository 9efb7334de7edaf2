//! Request dispatcher for the Rustack SDK.
//!
//! A [`ServiceClient`] drives one operation invocation through its phases:
//!
//! 1. **Built**: the operation's marshaller turns the typed input into a
//!    wire request; the dispatcher adds endpoint, `User-Agent` and an
//!    invocation id.
//! 2. **Signed**: credentials are resolved and the signer seals the request.
//! 3. **Sent**: the [`Transport`] exchanges it for an HTTP response. This is
//!    the only suspension point, and the only one a cancellation token can
//!    interrupt.
//! 4. **Succeeded** or **Faulted**: the response unmarshaller decodes the
//!    typed result, or the error envelope is mapped onto the service's
//!    fault table.
//!
//! [`BlockingRuntime`] wraps the async path for synchronous callers.

mod blocking;
mod client;
mod error;
mod transport;

pub use blocking::BlockingRuntime;
pub use client::{Operation, Phase, ServiceClient, ServiceClientBuilder, ServiceMetadata};
pub use error::{BuildError, SdkError, TransportError};
pub use transport::{ReqwestTransport, Transport};

pub use tokio_util::sync::CancellationToken;
