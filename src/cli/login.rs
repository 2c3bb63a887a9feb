//! Login command.

use crate::cli::output;
use crate::core::azure;
use crate::error::Result;

/// Run `az login` and report the resulting account.
pub fn execute() -> Result<()> {
    output::dimmed("waiting for az login...");

    let account = azure::login()?;
    output::success(&format!("logged in as {}", account.user.name));
    if let Some(subscription) = &account.name {
        output::kv("subscription", subscription);
    }

    Ok(())
}
