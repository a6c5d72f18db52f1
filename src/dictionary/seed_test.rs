// Tests for the built-in seed table
// Test cases:
// - Table is non-empty (initialize must produce a usable dictionary)
// - Codes are unique, non-empty, and stored pre-trimmed
// - Descriptions are non-empty and pre-trimmed

use std::collections::HashSet;

use super::*;

#[test]
fn test_seed_table_is_not_empty() {
    assert!(!SEED_ENTRIES.is_empty());
}

#[test]
fn test_seed_codes_unique_and_trimmed() {
    let mut seen = HashSet::new();
    for (code, description) in SEED_ENTRIES {
        assert!(!code.is_empty(), "blank code in seed table");
        assert_eq!(*code, code.trim(), "untrimmed code: {:?}", code);
        assert!(seen.insert(*code), "duplicate seed code: {}", code);
        assert!(!description.is_empty(), "blank description for {}", code);
        assert_eq!(
            *description,
            description.trim(),
            "untrimmed description for {}",
            code
        );
    }
}

#[test]
fn test_seed_contains_both_code_kinds() {
    // The decoder classifies combined-mode tokens by period presence, so a
    // useful out-of-the-box table needs both dotted stems and undotted
    // extensions.
    assert!(SEED_ENTRIES.iter().any(|(code, _)| code.contains('.')));
    assert!(SEED_ENTRIES.iter().any(|(code, _)| !code.contains('.')));
}
