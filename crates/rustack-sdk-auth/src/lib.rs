//! Request signing for the Rustack SDK.
//!
//! The dispatcher hands every marshalled [`WireRequest`](rustack_sdk_core::WireRequest)
//! to a [`Signer`]. Which signer a client uses depends on the protocol
//! version of the service:
//!
//! - [`SigV4Signer`]: header-based AWS Signature Version 4.
//! - [`SigV2Signer`]: query-parameter AWS Signature Version 2.
//! - [`AnonymousSigner`]: no signature at all.

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod signer;
pub mod sigv2;
pub mod sigv4;

pub use credentials::{ProvideCredentials, StaticCredentialsProvider};
pub use error::AuthError;
pub use signer::{AnonymousSigner, Signer, SigningContext};
pub use sigv2::{SigV2Signer, SignatureMethod};
pub use sigv4::SigV4Signer;
