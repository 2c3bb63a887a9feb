//! Keylift - push .env files into Azure Key Vault, get pipeline YAML back.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keylift::cli::output;
use keylift::cli::{execute, Cli};
use keylift::error::{ConfigError, Error, VaultError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("KEYLIFT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keylift=debug")
        } else {
            EnvFilter::new("keylift=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Vault(VaultError::AzCliNotFound) => {
                Some("install: https://learn.microsoft.com/cli/azure/install-azure-cli")
            }
            Error::Vault(VaultError::AzCommand { command, .. })
                if command.starts_with("account get-access-token") =>
            {
                Some("run: keylift login")
            }
            Error::Config(ConfigError::MissingVault) => {
                Some("pass --vault <name> or set vault in .keylift.toml")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
