//! Login status command.

use crate::cli::output;
use crate::core::azure;
use crate::error::Result;

/// Show whether the az CLI has an active session, and for whom.
pub fn execute() -> Result<()> {
    output::section("Azure account");

    match azure::account_show()? {
        Some(account) => {
            output::kv("logged in as", &account.user.name);
            if let Some(subscription) = &account.name {
                output::kv("subscription", subscription);
            }
        }
        None => {
            output::dimmed("not logged in");
            output::hint("run: keylift login");
        }
    }

    Ok(())
}
