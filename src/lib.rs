//! Keylift - push .env files into Azure Key Vault, get pipeline YAML back.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── push          # Parse, upload secrets, emit pipeline YAML
//! │   ├── emit          # Emit pipeline YAML only
//! │   ├── preview       # Show the normalized mapping
//! │   ├── status        # Azure CLI login status
//! │   ├── login         # Log in via the az CLI
//! │   ├── vaults        # List subscriptions and key vaults
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── env           # .env parsing and key normalization
//!     ├── vault         # Key Vault client and sequential publishing
//!     ├── pipeline      # Pipeline YAML rendering
//!     ├── azure         # az CLI bridge (accounts, tokens, discovery)
//!     ├── credential    # Injected credential resolution
//!     └── config        # Optional .keylift.toml defaults
//! ```
//!
//! # Features
//!
//! - Best-effort .env parsing with Key Vault-compatible key normalization
//! - Sequential secret upload with first-failure short circuit
//! - Deterministic Azure DevOps stage generation referencing every secret
//! - Ambient authentication through the az CLI

pub mod cli;
pub mod core;
pub mod error;
