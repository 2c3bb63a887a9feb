//! Command-line interface.

pub mod completions;
pub mod emit;
pub mod login;
pub mod output;
pub mod preview;
pub mod push;
pub mod status;
pub mod vaults;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::env::EnvSyntax;

/// Keylift - push .env files into Azure Key Vault, get pipeline YAML back.
#[derive(Parser)]
#[command(
    name = "keylift",
    about = "Push .env files into Azure Key Vault and generate the pipeline YAML that references them",
    version
)]
pub struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Upload a .env file as secrets and generate the pipeline stage
    Push {
        /// Path to the .env file
        file: PathBuf,
        /// Key Vault name (defaults to .keylift.toml)
        #[arg(long)]
        vault: Option<String>,
        /// Where to write the pipeline YAML (default: env.yml next to FILE)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Input line syntax
        #[arg(long, value_enum, default_value = "env")]
        syntax: Syntax,
        /// Fail on malformed lines instead of skipping them
        #[arg(long)]
        strict: bool,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
        /// Upload secrets without writing the pipeline YAML
        #[arg(long)]
        no_pipeline: bool,
    },

    /// Generate the pipeline YAML without uploading anything
    Emit {
        /// Path to the .env file
        file: PathBuf,
        /// Key Vault name (defaults to .keylift.toml)
        #[arg(long)]
        vault: Option<String>,
        /// Where to write the pipeline YAML (default: env.yml next to FILE)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Input line syntax
        #[arg(long, value_enum, default_value = "env")]
        syntax: Syntax,
        /// Fail on malformed lines instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Show the normalized key/value mapping for a .env file
    Preview {
        /// Path to the .env file
        file: PathBuf,
        /// Input line syntax
        #[arg(long, value_enum, default_value = "env")]
        syntax: Syntax,
        /// Fail on malformed lines instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Show Azure CLI login status
    Status,

    /// Log in to Azure via the az CLI
    Login,

    /// List subscriptions and their key vaults
    Vaults,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Input line syntax selector.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Syntax {
    /// KEY=VALUE lines
    Env,
    /// KEY: VALUE lines (the preview format)
    Preview,
}

impl From<Syntax> for EnvSyntax {
    fn from(syntax: Syntax) -> Self {
        match syntax {
            Syntax::Env => EnvSyntax::Env,
            Syntax::Preview => EnvSyntax::Preview,
        }
    }
}

/// Supported shells for completions.
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Push {
            file,
            vault,
            out,
            syntax,
            strict,
            yes,
            no_pipeline,
        } => push::execute(&file, vault, out, syntax.into(), strict, yes, no_pipeline),
        Emit {
            file,
            vault,
            out,
            syntax,
            strict,
        } => emit::execute(&file, vault, out, syntax.into(), strict),
        Preview {
            file,
            syntax,
            strict,
        } => preview::execute(&file, syntax.into(), strict),
        Status => status::execute(),
        Login => login::execute(),
        Vaults => vaults::execute(),
        Completions { shell } => completions::execute(shell),
    }
}
