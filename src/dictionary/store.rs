// Code dictionary - single source of truth mapping a code token to its description
// Seeded from the compiled-in table at startup, extended at runtime from imports

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::import::{CommaDelimitedParser, RecordParser};
use super::seed::SEED_ENTRIES;

/// A dictionary entry pairing a code token with its display description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// The code token used as lookup key (e.g., "KAB.DB.AD")
    pub code: String,
    /// Human-readable description shown to the user
    pub description: String,
}

/// In-memory store of code descriptions
///
/// Codes are unique within the store: inserting an existing code replaces
/// the previous description (last write wins), including any built-in seed
/// entry. Entries accumulate for the life of the process; there is no
/// delete operation.
#[derive(Debug, Default)]
pub struct CodeDictionary {
    /// Descriptions indexed by code
    entries: HashMap<String, String>,
}

impl CodeDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Populate the store from the compiled-in seed table
    ///
    /// Expected to run once at application startup. Returns the entry
    /// count after seeding.
    pub fn initialize(&mut self) -> usize {
        for (code, description) in SEED_ENTRIES {
            self.entries
                .insert((*code).to_string(), (*description).to_string());
        }
        crate::info!("Loaded {} built-in dictionary entries", self.entries.len());
        self.entries.len()
    }

    /// Merge comma-delimited records into the store
    ///
    /// One record per line; the first comma separates the code from its
    /// description and both fields are trimmed. Every non-empty line is
    /// treated as a record (no header handling) and there is no quoting or
    /// escaping: values containing commas are out of contract and may
    /// mis-parse. Malformed lines are skipped without aborting the import.
    /// Returns the number of records inserted.
    pub fn merge_from_delimited_text(&mut self, text: &str) -> usize {
        self.merge_with_parser(&CommaDelimitedParser, text)
    }

    /// Merge records produced by any parser implementation
    pub fn merge_with_parser(&mut self, parser: &dyn RecordParser, text: &str) -> usize {
        let records = parser.parse(text);
        let imported = records.len();
        for entry in records {
            self.entries.insert(entry.code, entry.description);
        }
        crate::debug!("Merged {} records into the dictionary", imported);
        imported
    }

    /// Look up the description for a code
    ///
    /// The query is trimmed before matching; matching is exact, with no
    /// fuzzy or prefix fallback. Absence is a normal outcome, not an
    /// error.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.entries.get(code.trim()).map(String::as_str)
    }

    /// Number of distinct codes held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot every entry, in unspecified order
    ///
    /// Intended for the host's export and seed-regeneration workflows,
    /// not for lookup.
    pub fn export_all(&self) -> Vec<DictionaryEntry> {
        self.entries
            .iter()
            .map(|(code, description)| DictionaryEntry {
                code: code.clone(),
                description: description.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
