//! Emit command: generate the pipeline YAML without touching the vault.

use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::core::config::Config;
use crate::core::env::{EnvMapping, EnvSyntax};
use crate::core::pipeline;
use crate::core::vault::Vault;
use crate::error::{ConfigError, EnvError, Result};

/// Render the pipeline stage for `file` and write it to disk.
pub fn execute(
    file: &Path,
    vault_name: Option<String>,
    out: Option<PathBuf>,
    syntax: EnvSyntax,
    strict: bool,
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

    let out = out
        .or_else(|| config.keylift.output.clone())
        .unwrap_or_else(|| pipeline::default_output_path(file));
    pipeline::emit(&vault, &env, &out)?;

    output::success(&format!(
        "wrote {} ({} secret reference{})",
        output::path(&out.display().to_string()),
        env.len(),
        if env.len() == 1 { "" } else { "s" }
    ));

    Ok(())
}
