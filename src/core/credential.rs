//! Injected credential resolution.
//!
//! The secret publisher never discovers credentials itself; it is handed a
//! [`CredentialProvider`]. Production code injects [`AzureCliCredential`],
//! tests inject [`StaticCredential`].

use zeroize::Zeroizing;

use crate::core::azure::{self, AccessToken};
use crate::error::Result;

/// Capability to produce a bearer token for a resource.
pub trait CredentialProvider {
    /// Resolve a token usable against `resource`.
    ///
    /// # Errors
    ///
    /// Returns a `VaultError` when no usable credential is available.
    fn access_token(&self, resource: &str) -> Result<AccessToken>;
}

/// Ambient credentials from the signed-in az CLI session.
pub struct AzureCliCredential;

impl CredentialProvider for AzureCliCredential {
    fn access_token(&self, resource: &str) -> Result<AccessToken> {
        azure::cli_access_token(resource)
    }
}

/// A fixed token, for tests and non-interactive environments.
pub struct StaticCredential {
    token: AccessToken,
}

impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Zeroizing::new(token.into()),
        }
    }
}

impl CredentialProvider for StaticCredential {
    fn access_token(&self, _resource: &str) -> Result<AccessToken> {
        Ok(self.token.clone())
    }
}
