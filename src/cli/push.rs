//! Upload command: parse, publish secrets, then emit the pipeline stage.

use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::core::config::Config;
use crate::core::credential::AzureCliCredential;
use crate::core::env::{EnvMapping, EnvSyntax};
use crate::core::pipeline;
use crate::core::vault::{self, KeyVaultClient, Vault};
use crate::error::{ConfigError, EnvError, Result};

/// Upload every entry of `file` to the vault, then write the pipeline YAML.
///
/// The pipeline document is only written after all secrets are set; a
/// publish failure leaves already-written secrets in place and skips
/// emission entirely.
pub fn execute(
    file: &Path,
    vault_name: Option<String>,
    out: Option<PathBuf>,
    syntax: EnvSyntax,
    strict: bool,
    yes: bool,
    no_pipeline: bool,
) -> Result<()> {
    let config = Config::load()?;
    let strict = strict || config.strict();

    let vault_name = vault_name
        .or_else(|| config.keylift.vault.clone())
        .ok_or(ConfigError::MissingVault)?;
    let vault = Vault::new(&vault_name)?;

    let env = if strict {
        EnvMapping::from_file_strict(file, syntax)?
    } else {
        EnvMapping::from_file(file, syntax)?
    };
    if env.is_empty() {
        return Err(EnvError::NoEntries(file.to_path_buf()).into());
    }

    output::header(&format!("{} → {}", file.display(), vault.url()));
    for entry in env.iter() {
        output::list_item(&entry.key);
    }

    if !yes && atty::is(atty::Stream::Stdin) {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Set {} secret{} in {}?",
                env.len(),
                if env.len() == 1 { "" } else { "s" },
                vault.name()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            output::dimmed("aborted");
            return Ok(());
        }
    }

    output::progress("resolving credentials");
    let client = match KeyVaultClient::connect(vault.clone(), &AzureCliCredential) {
        Ok(client) => {
            output::progress_done(true);
            client
        }
        Err(e) => {
            output::progress_done(false);
            return Err(e);
        }
    };

    let written = vault::publish(&client, &env)?;
    output::success(&format!(
        "set {written} secret{} in {}",
        if written == 1 { "" } else { "s" },
        vault.name()
    ));

    if no_pipeline {
        return Ok(());
    }

    let out = out
        .or_else(|| config.keylift.output.clone())
        .unwrap_or_else(|| pipeline::default_output_path(file));
    pipeline::emit(&vault, &env, &out)?;
    output::success(&format!(
        "wrote {}",
        output::path(&out.display().to_string())
    ));

    Ok(())
}
