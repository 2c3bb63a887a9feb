//! az CLI bridge.
//!
//! Account state, bearer tokens, and vault discovery all go through the
//! locally installed `az` CLI rather than a credential chain of our own.
//! Commands run synchronously with captured output; stderr is passed
//! through verbatim in errors.

use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::error::{Result, VaultError};

/// A bearer token usable against a Key Vault.
pub type AccessToken = Zeroizing<String>;

/// Signed-in account as reported by `az account show` / `az login`.
#[derive(Debug, Deserialize)]
pub struct Account {
    pub user: AccountUser,
    /// Name of the active subscription.
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AccountUser {
    /// Usually the signed-in email address.
    pub name: String,
}

/// One entry of `az account list`.
#[derive(Debug, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
}

#[derive(Deserialize)]
struct VaultEntry {
    name: String,
}

/// Check that the az CLI is installed.
///
/// # Errors
///
/// Returns `VaultError::AzCliNotFound` if `az` is not on PATH.
pub fn require_az() -> Result<()> {
    which::which("az")
        .map(|_| ())
        .map_err(|_| VaultError::AzCliNotFound.into())
}

/// Run `az` with the given arguments and return stdout.
fn az(args: &[&str]) -> Result<Vec<u8>> {
    require_az()?;
    trace!(?args, "running az");

    let output = Command::new("az")
        .args(args)
        .output()
        .map_err(|e| VaultError::AzCommand {
            command: args.join(" "),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(VaultError::AzCommand {
            command: args.join(" "),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    Ok(output.stdout)
}

fn parse_json<T: serde::de::DeserializeOwned>(command: &str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|source| {
        VaultError::CliOutput {
            command: command.to_string(),
            source,
        }
        .into()
    })
}

/// Current login state.
///
/// A non-zero exit from `az account show` means "not logged in", which is
/// an answer, not an error.
pub fn account_show() -> Result<Option<Account>> {
    require_az()?;

    let output = Command::new("az")
        .args(["account", "show", "--output", "json"])
        .output()
        .map_err(|e| VaultError::AzCommand {
            command: "account show".to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        debug!("az account show reported no active account");
        return Ok(None);
    }

    parse_json("account show", &output.stdout).map(Some)
}

/// Interactive `az login`.
///
/// stderr is inherited so the browser/device-code instructions reach the
/// user while we capture the resulting account JSON from stdout.
///
/// # Errors
///
/// Returns `VaultError::AzCommand` if the login fails or is aborted.
pub fn login() -> Result<Account> {
    require_az()?;

    let output = Command::new("az")
        .args(["login", "--output", "json"])
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| VaultError::AzCommand {
            command: "login".to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(VaultError::AzCommand {
            command: "login".to_string(),
            message: "login failed or was aborted".to_string(),
        }
        .into());
    }

    // az login returns the list of visible accounts; the first is the active one
    let mut accounts: Vec<Account> = parse_json("login", &output.stdout)?;
    if accounts.is_empty() {
        return Err(VaultError::AzCommand {
            command: "login".to_string(),
            message: "no accounts returned".to_string(),
        }
        .into());
    }
    Ok(accounts.remove(0))
}

/// List subscriptions visible to the signed-in account.
pub fn list_subscriptions() -> Result<Vec<Subscription>> {
    let stdout = az(&["account", "list", "--output", "json"])?;
    parse_json("account list", &stdout)
}

/// List Key Vault names in one subscription.
///
/// Uses `--subscription` instead of mutating the CLI's active subscription.
pub fn list_vaults(subscription_id: &str) -> Result<Vec<String>> {
    let stdout = az(&[
        "keyvault",
        "list",
        "--subscription",
        subscription_id,
        "--output",
        "json",
    ])?;
    let entries: Vec<VaultEntry> = parse_json("keyvault list", &stdout)?;
    Ok(entries.into_iter().map(|e| e.name).collect())
}

/// Obtain a bearer token for the given resource from the ambient az session.
///
/// # Errors
///
/// Returns `VaultError::AzCommand` when no session exists (the usual fix is
/// `keylift login`) and `VaultError::CliOutput` on unexpected JSON.
pub fn cli_access_token(resource: &str) -> Result<AccessToken> {
    let stdout = az(&[
        "account",
        "get-access-token",
        "--resource",
        resource,
        "--output",
        "json",
    ])?;
    let token: TokenResponse = parse_json("account get-access-token", &stdout)?;
    Ok(Zeroizing::new(token.access_token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_json_shape() {
        let raw = r#"{"name": "Pay-As-You-Go", "user": {"name": "dev@example.com", "type": "user"}}"#;
        let account: Account = serde_json::from_str(raw).unwrap();

        assert_eq!(account.user.name, "dev@example.com");
        assert_eq!(account.name.as_deref(), Some("Pay-As-You-Go"));
    }

    #[test]
    fn test_token_json_shape() {
        let raw = r#"{"accessToken": "eyJ0eXAi", "expiresOn": "2024-01-01 00:00:00.000000", "tokenType": "Bearer"}"#;
        let token: TokenResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(token.access_token, "eyJ0eXAi");
    }

    #[test]
    fn test_vault_list_json_shape() {
        let raw = r#"[{"name": "team-vault", "location": "westeurope"}, {"name": "prod-vault"}]"#;
        let entries: Vec<VaultEntry> = serde_json::from_str(raw).unwrap();

        let names: Vec<String> = entries.into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["team-vault", "prod-vault"]);
    }
}
