//! Error types for request signing.

use rustack_sdk_core::CoreError;

/// Errors that can occur while signing a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A header the signature depends on is missing.
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// The HMAC key could not be initialised.
    #[error("Invalid signing key")]
    InvalidSigningKey,

    /// No credentials are available.
    #[error("Credentials not loaded: {0}")]
    CredentialsNotLoaded(String),

    /// The request could not be updated with signing material.
    #[error(transparent)]
    Request(#[from] CoreError),
}
