//! Preview command: print the normalized mapping.
//!
//! Output uses the `KEY: VALUE` preview syntax, so it can be edited and fed
//! back with `--syntax preview`.

use std::path::Path;

use crate::core::config::Config;
use crate::core::env::{EnvMapping, EnvSyntax};
use crate::error::Result;

/// Print what would be uploaded, one `KEY: VALUE` line per entry.
pub fn execute(file: &Path, syntax: EnvSyntax, strict: bool) -> Result<()> {
    let strict = strict || Config::load()?.strict();

    let env = if strict {
        EnvMapping::from_file_strict(file, syntax)?
    } else {
        EnvMapping::from_file(file, syntax)?
    };

    for entry in env.iter() {
        println!("{}: {}", entry.key, entry.value.as_str());
    }

    Ok(())
}
