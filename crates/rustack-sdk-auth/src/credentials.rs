//! Credential providers.
//!
//! The dispatcher asks its [`ProvideCredentials`] implementation for
//! credentials once per call, right before signing.

use std::fmt;

use rustack_sdk_core::Credentials;

use crate::error::AuthError;

/// Source of the credentials used to sign requests.
pub trait ProvideCredentials: Send + Sync + fmt::Debug {
    /// Return the credentials to sign the next request with.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialsNotLoaded`] when no credentials are available.
    fn provide_credentials(&self) -> Result<Credentials, AuthError>;
}

/// A provider that always returns the same credentials.
#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    credentials: Credentials,
}

impl StaticCredentialsProvider {
    /// Wrap fixed credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl From<Credentials> for StaticCredentialsProvider {
    fn from(credentials: Credentials) -> Self {
        Self::new(credentials)
    }
}

impl ProvideCredentials for StaticCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, AuthError> {
        if self.credentials.access_key_id.is_empty() {
            return Err(AuthError::CredentialsNotLoaded(
                "access key id is empty".to_owned(),
            ));
        }
        Ok(self.credentials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_return_static_credentials() {
        let provider = StaticCredentialsProvider::from(Credentials::new("AKID", "secret"));
        let creds = provider.provide_credentials().unwrap();
        assert_eq!(creds.access_key_id, "AKID");
        assert_eq!(creds.secret_access_key, "secret");
    }

    #[test]
    fn test_should_reject_empty_access_key() {
        let provider = StaticCredentialsProvider::new(Credentials::new("", "secret"));
        assert!(matches!(
            provider.provide_credentials(),
            Err(AuthError::CredentialsNotLoaded(_))
        ));
    }
}
