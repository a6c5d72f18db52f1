// Delimited-text record parsing for dictionary imports
// The trait seam lets a stricter tabular parser replace the lenient
// line/comma split without touching the store contract.

use super::store::DictionaryEntry;

/// Parses externally supplied tabular text into dictionary records
pub trait RecordParser {
    /// Parse `text` into records, skipping anything malformed
    fn parse(&self, text: &str) -> Vec<DictionaryEntry>;
}

/// Lenient comma-delimited parser
///
/// One record per line; the first comma splits code from description and
/// both fields are trimmed. Lines with fewer than two fields, or an empty
/// code after trimming, are skipped. No header handling, no quote or
/// escape support.
#[derive(Debug, Default)]
pub struct CommaDelimitedParser;

impl RecordParser for CommaDelimitedParser {
    fn parse(&self, text: &str) -> Vec<DictionaryEntry> {
        text.lines()
            .filter_map(|line| {
                let (code, description) = line.split_once(',')?;
                let code = code.trim();
                if code.is_empty() {
                    return None;
                }
                Some(DictionaryEntry {
                    code: code.to_string(),
                    description: description.trim().to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
