use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type wrapping the domain error enums.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Errors from reading and (strictly) parsing env input.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} is not a key/value pair: {content}")]
    MalformedLine { line: usize, content: String },

    #[error("no environment variables found in {}", .0.display())]
    NoEntries(PathBuf),
}

/// Errors from the secret store or the az CLI behind it.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("vault name cannot be empty")]
    EmptyName,

    #[error("az CLI not found")]
    AzCliNotFound,

    #[error("az {command} failed: {message}")]
    AzCommand { command: String, message: String },

    #[error("unexpected az {command} output: {source}")]
    CliOutput {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("request to key vault failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to set secret '{name}': {message}")]
    SetSecret { name: String, message: String },
}

/// Errors from writing the pipeline document.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from `.keylift.toml` handling and missing required settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("no vault name given")]
    MissingVault,
}

pub type Result<T> = std::result::Result<T, Error>;
