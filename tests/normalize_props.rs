//! Property tests for parsing and normalization.

use keylift::core::env::{normalize_key, normalize_value, EnvMapping, EnvSyntax};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn normalize_key_is_idempotent(raw in "\\PC*") {
        let once = normalize_key(&raw);
        prop_assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn normalize_value_is_idempotent(raw in "\\PC*") {
        let once = normalize_value(&raw);
        prop_assert_eq!(normalize_value(&once), once);
    }

    #[test]
    fn normalized_keys_have_no_underscores_or_whitespace(raw in "\\PC*") {
        let key = normalize_key(&raw);
        prop_assert!(!key.contains('_'));
        prop_assert!(!key.chars().any(char::is_whitespace));
    }

    #[test]
    fn parse_upholds_mapping_invariants(text in "\\PC*", preview in any::<bool>()) {
        let syntax = if preview { EnvSyntax::Preview } else { EnvSyntax::Env };
        let mapping = EnvMapping::parse(&text, syntax);

        let mut seen = Vec::new();
        for entry in mapping.iter() {
            prop_assert!(!entry.key.is_empty());
            prop_assert!(!entry.value.is_empty());
            prop_assert!(!entry.key.chars().any(char::is_whitespace));
            prop_assert!(!seen.contains(&entry.key));
            seen.push(entry.key.clone());
        }
    }
}
