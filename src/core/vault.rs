//! Key Vault client and sequential secret publishing.
//!
//! One `PUT` per secret against the vault's REST surface, strictly in
//! mapping order. The first failure stops the run; secrets already written
//! stay written. There is no retry and no rollback.

use reqwest::blocking::Client;
use tracing::debug;

use crate::core::azure::AccessToken;
use crate::core::constants;
use crate::core::credential::CredentialProvider;
use crate::core::env::EnvMapping;
use crate::error::{Result, VaultError};

/// A named Key Vault instance.
#[derive(Debug, Clone)]
pub struct Vault {
    name: String,
}

impl Vault {
    /// Create a vault handle from its name.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::EmptyName` if the name is empty after trimming.
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VaultError::EmptyName.into());
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base address of the vault.
    pub fn url(&self) -> String {
        format!("https://{}.{}", self.name, constants::VAULT_DOMAIN)
    }

    /// Address of the create-or-update operation for one secret.
    pub fn secret_url(&self, key: &str) -> String {
        format!(
            "{}/secrets/{}?api-version={}",
            self.url(),
            key,
            constants::KEYVAULT_API_VERSION
        )
    }
}

/// Remote store accepting create-or-update secret writes.
///
/// The live implementation is [`KeyVaultClient`]; tests substitute doubles.
pub trait SecretStore {
    /// Create or update one secret by name.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::SetSecret` with the provider's message on rejection.
    fn set_secret(&self, name: &str, value: &str) -> Result<()>;
}

/// Live Key Vault client over blocking HTTP.
pub struct KeyVaultClient {
    vault: Vault,
    client: Client,
    token: AccessToken,
}

impl KeyVaultClient {
    /// Resolve a bearer token for the vault resource and build a client.
    ///
    /// The token is obtained once and reused for every secret in the run.
    ///
    /// # Errors
    ///
    /// Returns a `VaultError` if credential resolution fails.
    pub fn connect(vault: Vault, credential: &dyn CredentialProvider) -> Result<Self> {
        let token = credential.access_token(constants::VAULT_RESOURCE)?;
        debug!(vault = %vault.url(), "resolved vault credential");

        Ok(Self {
            vault,
            client: Client::new(),
            token,
        })
    }
}

impl SecretStore for KeyVaultClient {
    fn set_secret(&self, name: &str, value: &str) -> Result<()> {
        let url = self.vault.secret_url(name);

        let response = self
            .client
            .put(&url)
            .bearer_auth(self.token.as_str())
            .json(&serde_json::json!({ "value": value }))
            .send()
            .map_err(VaultError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(VaultError::SetSecret {
                name: name.to_string(),
                message: format!("{status}: {}", body.trim()),
            }
            .into());
        }

        Ok(())
    }
}

/// Write every mapping entry to the store, in order.
///
/// Sequential on purpose: the emitted pipeline references secrets in the
/// same order, and a failure must leave a clean prefix.
///
/// # Returns
///
/// The number of secrets written.
///
/// # Errors
///
/// Propagates the first `set_secret` failure; later entries are not attempted.
pub fn publish(store: &dyn SecretStore, env: &EnvMapping) -> Result<usize> {
    let mut written = 0;

    for entry in env.iter() {
        debug!(key = %entry.key, "setting secret");
        store.set_secret(&entry.key, &entry.value)?;
        written += 1;
    }

    Ok(written)
}
