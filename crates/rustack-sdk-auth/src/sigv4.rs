//! AWS Signature Version 4 header signing.
//!
//! 1. Stamp `x-amz-date` (and the session token, when present).
//! 2. Build the canonical request from method, path, canonical query,
//!    headers and payload hash.
//! 3. Build the string to sign from the timestamp, credential scope and
//!    canonical request hash.
//! 4. Derive the signing key with the HMAC-SHA256 chain and sign.
//! 5. Attach the `Authorization` header.

use hmac::{Hmac, KeyInit, Mac};
use rustack_sdk_core::{Credentials, SignedRequest, WireRequest};
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::canonical::CanonicalRequest;
use crate::error::AuthError;
use crate::signer::{Signer, SigningContext};

/// Signing algorithm identifier.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

type HmacSha256 = Hmac<Sha256>;

/// Signs requests with AWS Signature Version 4.
#[derive(Debug, Clone, Copy, Default)]
pub struct SigV4Signer {
    content_sha256_header: bool,
}

impl SigV4Signer {
    /// Create a signer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also send the payload hash as `x-amz-content-sha256`.
    #[must_use]
    pub fn with_content_sha256_header(mut self) -> Self {
        self.content_sha256_header = true;
        self
    }
}

impl Signer for SigV4Signer {
    fn name(&self) -> &'static str {
        "sigv4"
    }

    fn sign(
        &self,
        mut request: WireRequest,
        credentials: &Credentials,
        context: &SigningContext,
    ) -> Result<SignedRequest, AuthError> {
        if request.header("host").is_none() {
            return Err(AuthError::MissingHeader("host".to_owned()));
        }

        let amz_date = context.time.format("%Y%m%dT%H%M%SZ").to_string();
        let date = context.time.format("%Y%m%d").to_string();
        request.set_header("x-amz-date", &amz_date)?;
        if let Some(token) = &credentials.session_token {
            request.set_header("x-amz-security-token", token)?;
        }

        let payload_hash = hash_payload(&request.payload());
        if self.content_sha256_header {
            request.set_header("x-amz-content-sha256", &payload_hash)?;
        }

        let query = if request.parameters_in_body() {
            String::new()
        } else {
            request.parameters().to_canonical_string()
        };
        let headers: Vec<(&str, &str)> = request
            .headers()
            .iter()
            .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str(), v)))
            .collect();
        let canonical = CanonicalRequest::new(
            request.method().as_str(),
            request.resource_path(),
            &query,
            headers,
            &payload_hash,
        );

        let scope = credential_scope(&date, context.region.as_str(), context.signing_name);
        let string_to_sign = build_string_to_sign(&amz_date, &scope, &canonical.hash());
        let signing_key = derive_signing_key(
            &credentials.secret_access_key,
            &date,
            context.region.as_str(),
            context.signing_name,
        )?;
        let signature = compute_signature(&signing_key, &string_to_sign)?;

        trace!(
            service = context.signing_name,
            signed_headers = %canonical.signed_headers(),
            "computed sigv4 signature"
        );

        let authorization = format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={}, Signature={signature}",
            credentials.access_key_id,
            canonical.signed_headers()
        );
        request.set_header("authorization", &authorization)?;

        Ok(SignedRequest::new(request))
    }
}

/// `date/region/service/aws4_request`
#[must_use]
pub fn credential_scope(date: &str, region: &str, service: &str) -> String {
    format!("{date}/{region}/{service}/aws4_request")
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256\n
/// <timestamp>\n
/// <credential scope>\n
/// <hex(SHA256(canonical request))>
/// ```
#[must_use]
pub fn build_string_to_sign(
    timestamp: &str,
    credential_scope: &str,
    canonical_request_hash: &str,
) -> String {
    format!("{ALGORITHM}\n{timestamp}\n{credential_scope}\n{canonical_request_hash}")
}

/// Derive the signing key.
///
/// ```text
/// DateKey              = HMAC-SHA256("AWS4" + secret_key, date)
/// DateRegionKey        = HMAC-SHA256(DateKey, region)
/// DateRegionServiceKey = HMAC-SHA256(DateRegionKey, service)
/// SigningKey           = HMAC-SHA256(DateRegionServiceKey, "aws4_request")
/// ```
pub fn derive_signing_key(
    secret_key: &str,
    date: &str,
    region: &str,
    service: &str,
) -> Result<Vec<u8>, AuthError> {
    let date_key = hmac_sha256(format!("AWS4{secret_key}").as_bytes(), date.as_bytes())?;
    let date_region_key = hmac_sha256(&date_key, region.as_bytes())?;
    let date_region_service_key = hmac_sha256(&date_region_key, service.as_bytes())?;
    hmac_sha256(&date_region_service_key, b"aws4_request")
}

/// Hex HMAC-SHA256 of `data` under `signing_key`.
pub fn compute_signature(signing_key: &[u8], data: &str) -> Result<String, AuthError> {
    hmac_sha256(signing_key, data.as_bytes()).map(hex::encode)
}

/// Hex SHA-256 of a payload.
#[must_use]
pub fn hash_payload(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, AuthError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| AuthError::InvalidSigningKey)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}
