//! Vault discovery command.

use crate::cli::output;
use crate::core::azure;
use crate::error::Result;

/// List every subscription and the key vaults it contains.
pub fn execute() -> Result<()> {
    let subscriptions = azure::list_subscriptions()?;
    if subscriptions.is_empty() {
        output::dimmed("no subscriptions visible to this account");
        return Ok(());
    }

    for subscription in subscriptions {
        output::section(&subscription.name);

        let vaults = azure::list_vaults(&subscription.id)?;
        if vaults.is_empty() {
            output::dimmed("no key vaults");
            continue;
        }
        for vault in vaults {
            output::list_item(&vault);
        }
    }

    Ok(())
}
