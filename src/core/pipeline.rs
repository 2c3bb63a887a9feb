//! Pipeline YAML rendering.
//!
//! Renders the fixed Azure DevOps stage that re-points a web app's settings
//! at the uploaded secrets, one `@Microsoft.KeyVault(...)` reference per
//! entry. The vault host embeds `${{ parameters.environment }}`, resolved
//! when the pipeline runs, not here.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::core::env::{shell_name, EnvMapping};
use crate::core::vault::Vault;
use crate::error::{PipelineError, Result};

const TEMPLATE_HEADER: &[&str] = &[
    "parameters:",
    "  - name: environment",
    "    type: string",
    "",
    "stages:",
    "- stage: Update_Environment_Variables",
    "  displayName: Update Environment Variables",
    "  jobs:",
    "  - job: Update_Environment_Variables",
    "    displayName: Update Environment Variables",
    "    steps:",
    "    - task: AzureCLI@2",
    "      displayName: 'Update environment variables'",
    "      inputs:",
    "        azureSubscription: $(azureSubscription)",
    "        scriptType: 'bash'",
    "        scriptLocation: 'inlineScript'",
    "        inlineScript: |",
    "          az webapp config appsettings set --resource-group $(resource_group_name) --name $(web_app_name) --settings \\",
];

/// Render the pipeline document for a vault and mapping.
///
/// One settings line per entry, in mapping order. The shell variable name is
/// the key with hyphens turned back into underscores; the secret URI keeps
/// the hyphenated name as published.
pub fn render(vault: &Vault, env: &EnvMapping) -> String {
    let mut doc = TEMPLATE_HEADER.join("\n");
    doc.push('\n');

    for entry in env.iter() {
        doc.push_str(&format!(
            "          {}=\"@Microsoft.KeyVault(SecretUri=https://{}${{{{ parameters.environment }}}}.{}/secrets/{}/)\"\n",
            shell_name(&entry.key),
            vault.name(),
            constants::VAULT_DOMAIN,
            entry.key,
        ));
    }

    doc.push('\n');
    doc
}

/// Render and write the document, replacing any existing file.
///
/// No merge, no backup, no read-back.
///
/// # Errors
///
/// Returns `PipelineError::Write` if the file cannot be written.
pub fn emit(vault: &Vault, env: &EnvMapping, path: &Path) -> Result<()> {
    let doc = render(vault, env);

    debug!(path = %path.display(), entries = env.len(), "writing pipeline document");
    std::fs::write(path, doc).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Default destination: `env.yml` next to the input file.
///
/// Falls back to the user's documents directory, then the current directory,
/// when the input path has no parent.
pub fn default_output_path(env_file: &Path) -> PathBuf {
    if let Some(dir) = env_file.parent() {
        if !dir.as_os_str().is_empty() {
            return dir.join(constants::DEFAULT_OUTPUT_FILE);
        }
    }

    dirs::document_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::DEFAULT_OUTPUT_FILE)
}
