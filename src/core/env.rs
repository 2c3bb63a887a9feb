//! .env parsing and key normalization.
//!
//! Turns dotenv-style text into an ordered mapping whose keys are valid
//! Key Vault secret names. Parsing is best-effort by default: malformed
//! lines are skipped, not reported. `parse_strict` turns them into errors.

use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{EnvError, Result};

/// Line syntax for key/value input.
///
/// Files use `KEY=VALUE`; the editable preview format uses `KEY: VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvSyntax {
    #[default]
    Env,
    Preview,
}

impl EnvSyntax {
    fn delimiter(self) -> char {
        match self {
            EnvSyntax::Env => '=',
            EnvSyntax::Preview => ':',
        }
    }
}

/// One normalized key/value pair.
///
/// The value is held in a zeroizing buffer since it is secret material.
#[derive(Debug)]
pub struct EnvEntry {
    pub key: String,
    pub value: Zeroizing<String>,
}

/// Ordered mapping of normalized keys to values.
///
/// Keys are unique; a duplicate key overwrites the value in place and keeps
/// the position where the key was first seen. Never mutated after parsing.
#[derive(Debug, Default)]
pub struct EnvMapping {
    entries: Vec<EnvEntry>,
}

impl EnvMapping {
    /// Parse key/value text, skipping anything that is not a usable pair.
    ///
    /// Lines that are blank after trimming or start with `#` are ignored.
    /// Remaining lines are split on the first delimiter; a line where either
    /// side normalizes to empty is dropped. An empty mapping from non-empty
    /// input is a legitimate outcome, not a failure.
    pub fn parse(text: &str, syntax: EnvSyntax) -> Self {
        let mut mapping = Self::default();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((raw_key, raw_value)) = line.split_once(syntax.delimiter()) else {
                continue;
            };

            let key = normalize_key(raw_key);
            let value = normalize_value(raw_value);
            if key.is_empty() || value.is_empty() {
                continue;
            }

            mapping.insert(key, value);
        }

        debug!(entries = mapping.len(), "parsed env input");
        mapping
    }

    /// Parse like [`EnvMapping::parse`], but fail on the first malformed line.
    ///
    /// A malformed line is a non-comment, non-blank line with no delimiter or
    /// with a side that normalizes to empty. The error names the 1-based line.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::MalformedLine` for the first offending line.
    pub fn parse_strict(text: &str, syntax: EnvSyntax) -> Result<Self> {
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let well_formed = line
                .split_once(syntax.delimiter())
                .map(|(k, v)| !normalize_key(k).is_empty() && !normalize_value(v).is_empty())
                .unwrap_or(false);

            if !well_formed {
                return Err(EnvError::MalformedLine {
                    line: idx + 1,
                    content: line.to_string(),
                }
                .into());
            }
        }

        Ok(Self::parse(text, syntax))
    }

    /// Read and parse a file (best-effort).
    ///
    /// # Errors
    ///
    /// Returns `EnvError::ReadFile` if the file cannot be read.
    pub fn from_file(path: &Path, syntax: EnvSyntax) -> Result<Self> {
        Ok(Self::parse(&read(path)?, syntax))
    }

    /// Read and parse a file, failing on malformed lines.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::ReadFile` or `EnvError::MalformedLine`.
    pub fn from_file_strict(path: &Path, syntax: EnvSyntax) -> Result<Self> {
        Self::parse_strict(&read(path)?, syntax)
    }

    /// Insert a pre-normalized pair, last write wins.
    fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.value = Zeroizing::new(value),
            None => self.entries.push(EnvEntry {
                key,
                value: Zeroizing::new(value),
            }),
        }
    }

    /// Iterate entries in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = &EnvEntry> {
        self.entries.iter()
    }

    /// Look up a value by normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        EnvError::ReadFile {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Normalize a raw key: underscores become hyphens, whitespace is removed.
///
/// The result is a valid Key Vault secret name fragment. Idempotent.
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '_' { '-' } else { c })
        .collect()
}

/// Normalize a raw value: all whitespace is removed. Idempotent.
///
/// Multi-word values collapse. Deliberate: the uploaded secret and the
/// pipeline reference must agree on one whitespace-free form.
pub fn normalize_value(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Shell variable name for a normalized key: hyphens back to underscores.
pub fn shell_name(key: &str) -> String {
    key.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "API_KEY=abc123\n# comment\nEMPTY_LINE_BELOW\n\nDB_HOST=localhost\n";
        let mapping = EnvMapping::parse(text, EnvSyntax::Env);

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("API-KEY"), Some("abc123"));
        assert_eq!(mapping.get("DB-HOST"), Some("localhost"));
    }

    #[test]
    fn test_parse_preserves_insertion_order() {
        let text = "B=1\nA=2\nC=3\n";
        let mapping = EnvMapping::parse(text, EnvSyntax::Env);

        let keys: Vec<&str> = mapping.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_parse_duplicate_last_write_wins() {
        let text = "A=1\nB=2\nA=3\n";
        let mapping = EnvMapping::parse(text, EnvSyntax::Env);

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("A"), Some("3"));
        // Position of first insertion is kept
        let keys: Vec<&str> = mapping.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_strips_whitespace_from_values() {
        let mapping = EnvMapping::parse("GREETING=hello world\n", EnvSyntax::Env);
        assert_eq!(mapping.get("GREETING"), Some("helloworld"));
    }

    #[test]
    fn test_parse_drops_empty_sides() {
        let text = "=value\nKEY=\n   =   \nOK=1\n";
        let mapping = EnvMapping::parse(text, EnvSyntax::Env);

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("OK"), Some("1"));
    }

    #[test]
    fn test_parse_value_keeps_later_delimiters() {
        let mapping = EnvMapping::parse("URL=postgres://u:p@host/db?a=1\n", EnvSyntax::Env);
        assert_eq!(mapping.get("URL"), Some("postgres://u:p@host/db?a=1"));
    }

    #[test]
    fn test_preview_syntax_splits_on_first_colon() {
        let mapping = EnvMapping::parse("DB-URL: postgres://localhost:5432\n", EnvSyntax::Preview);
        assert_eq!(mapping.get("DB-URL"), Some("postgres://localhost:5432"));
    }

    #[test]
    fn test_parse_nonempty_input_can_yield_empty_mapping() {
        let mapping = EnvMapping::parse("# only a comment\nnot a pair\n", EnvSyntax::Env);
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_parse_strict_rejects_line_without_delimiter() {
        let text = "GOOD=1\nbroken line\n";
        let err = EnvMapping::parse_strict(text, EnvSyntax::Env).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("line 2"), "unexpected message: {msg}");
        assert!(msg.contains("broken line"));
    }

    #[test]
    fn test_parse_strict_rejects_empty_value() {
        let err = EnvMapping::parse_strict("KEY=\n", EnvSyntax::Env).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_parse_strict_accepts_clean_input() {
        let mapping = EnvMapping::parse_strict("A=1\n# fine\n\nB=2\n", EnvSyntax::Env).unwrap();
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn test_normalize_key_replaces_underscores() {
        assert_eq!(normalize_key("API_SECRET_KEY"), "API-SECRET-KEY");
        assert_eq!(normalize_key("  SPACED _ KEY "), "SPACED-KEY");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_key("MY_APP KEY\t2");
        assert_eq!(normalize_key(&once), once);

        let vonce = normalize_value(" some value\n");
        assert_eq!(normalize_value(&vonce), vonce);
    }

    #[test]
    fn test_shell_name_round_trip() {
        assert_eq!(shell_name("FOO-BAR"), "FOO_BAR");
        assert_eq!(shell_name(&normalize_key("FOO_BAR")), "FOO_BAR");
    }
}
