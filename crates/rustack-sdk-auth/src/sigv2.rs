//! AWS Signature Version 2 query signing.
//!
//! Older query-protocol services authenticate with signed form parameters
//! instead of an `Authorization` header:
//!
//! ```text
//! StringToSign = HTTPVerb + "\n" +
//!                ValueOfHostHeaderInLowercase + "\n" +
//!                HTTPRequestURI + "\n" +
//!                CanonicalizedQueryString
//! Signature    = Base64(HMAC(SecretKey, StringToSign))
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use rustack_sdk_core::{Credentials, SignedRequest, WireRequest};
use sha1::Sha1;
use sha2::Sha256;
use tracing::trace;

use crate::error::AuthError;
use crate::signer::{Signer, SigningContext};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// HMAC flavour of a SigV2 signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMethod {
    /// `HmacSHA256`
    #[default]
    HmacSha256,
    /// `HmacSHA1`
    HmacSha1,
}

impl SignatureMethod {
    /// Value of the `SignatureMethod` parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HmacSha256 => "HmacSHA256",
            Self::HmacSha1 => "HmacSHA1",
        }
    }

    fn mac(self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, AuthError> {
        match self {
            Self::HmacSha256 => {
                let mut mac =
                    HmacSha256::new_from_slice(key).map_err(|_| AuthError::InvalidSigningKey)?;
                mac.update(data);
                Ok(mac.finalize().into_bytes().to_vec())
            }
            Self::HmacSha1 => {
                let mut mac =
                    HmacSha1::new_from_slice(key).map_err(|_| AuthError::InvalidSigningKey)?;
                mac.update(data);
                Ok(mac.finalize().into_bytes().to_vec())
            }
        }
    }
}

/// Signs query-protocol requests with AWS Signature Version 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct SigV2Signer {
    method: SignatureMethod,
}

impl SigV2Signer {
    /// Create a signer using the given HMAC flavour.
    #[must_use]
    pub fn new(method: SignatureMethod) -> Self {
        Self { method }
    }
}

impl Signer for SigV2Signer {
    fn name(&self) -> &'static str {
        "sigv2"
    }

    fn sign(
        &self,
        mut request: WireRequest,
        credentials: &Credentials,
        context: &SigningContext,
    ) -> Result<SignedRequest, AuthError> {
        let host = request
            .header("host")
            .ok_or_else(|| AuthError::MissingHeader("host".to_owned()))?
            .to_ascii_lowercase();

        let timestamp = context.time.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let params = request.parameters_mut();
        params.insert("AWSAccessKeyId", credentials.access_key_id.as_str());
        params.insert("SignatureVersion", "2");
        params.insert("SignatureMethod", self.method.as_str());
        params.insert("Timestamp", timestamp);
        if let Some(token) = &credentials.session_token {
            params.insert("SecurityToken", token.as_str());
        }

        let string_to_sign = build_string_to_sign(
            request.method().as_str(),
            &host,
            request.resource_path(),
            &request.parameters().to_canonical_string(),
        );
        let signature = BASE64.encode(
            self.method
                .mac(credentials.secret_access_key.as_bytes(), string_to_sign.as_bytes())?,
        );
        trace!(method = self.method.as_str(), "computed sigv2 signature");

        request.parameters_mut().insert("Signature", signature);
        Ok(SignedRequest::new(request))
    }
}

/// Build the SigV2 string to sign.
#[must_use]
pub fn build_string_to_sign(method: &str, host: &str, path: &str, canonical_query: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };
    format!("{method}\n{host}\n{path}\n{canonical_query}")
}
