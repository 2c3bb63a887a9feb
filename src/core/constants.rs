//! Constants used throughout keylift.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.keylift.toml).
pub const CONFIG_FILE: &str = ".keylift.toml";

/// Default pipeline document file name.
pub const DEFAULT_OUTPUT_FILE: &str = "env.yml";

/// DNS suffix of Key Vault instances.
pub const VAULT_DOMAIN: &str = "vault.azure.net";

/// Resource identifier used when requesting bearer tokens for Key Vault.
pub const VAULT_RESOURCE: &str = "https://vault.azure.net";

/// REST api-version for the set-secret operation.
pub const KEYVAULT_API_VERSION: &str = "7.4";
