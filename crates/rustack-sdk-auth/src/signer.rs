//! The signer capability.

use std::fmt;

use chrono::{DateTime, Utc};
use rustack_sdk_core::{Credentials, Region, SignedRequest, WireRequest};

use crate::error::AuthError;

/// Per-call inputs of a signature besides the credentials.
#[derive(Debug, Clone)]
pub struct SigningContext {
    /// Region of the credential scope.
    pub region: Region,
    /// Service name of the credential scope, e.g. `elasticache`.
    pub signing_name: &'static str,
    /// Signing time.
    pub time: DateTime<Utc>,
}

impl SigningContext {
    /// Context signing at the current time.
    #[must_use]
    pub fn now(region: Region, signing_name: &'static str) -> Self {
        Self {
            region,
            signing_name,
            time: Utc::now(),
        }
    }
}

/// Computes a signature over a request and attaches it.
///
/// Signing consumes the request and returns it sealed, so nothing can change
/// it after the signature was computed.
pub trait Signer: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Sign the request.
    fn sign(
        &self,
        request: WireRequest,
        credentials: &Credentials,
        context: &SigningContext,
    ) -> Result<SignedRequest, AuthError>;
}

/// Passes requests through without a signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousSigner;

impl Signer for AnonymousSigner {
    fn name(&self) -> &'static str {
        "anonymous"
    }

    fn sign(
        &self,
        request: WireRequest,
        _credentials: &Credentials,
        _context: &SigningContext,
    ) -> Result<SignedRequest, AuthError> {
        Ok(SignedRequest::new(request))
    }
}
