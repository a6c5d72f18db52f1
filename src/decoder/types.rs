// Value types crossing the host boundary for decode requests

use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryEntry;

/// Input shapes accepted by [`decode`](super::decode)
///
/// The host supplies exactly one of the two modes per request: a single
/// ampersand-delimited string, or the pre-segmented stem and extension
/// slots of its entry form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum DecodeInput {
    /// A single combined string, e.g. "KAB.DB.AD & XA1"
    #[serde(rename_all = "camelCase")]
    Combined { combined_string: String },
    /// Pre-segmented slots; blank slots are dropped during decoding
    #[serde(rename_all = "camelCase")]
    Separate {
        stem_slots: Vec<String>,
        extension_slots: Vec<String>,
    },
}

/// Result of decoding one request
///
/// A per-request value object: constructed fresh by [`decode`](super::decode)
/// and consumed immediately by the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecodedResult {
    /// Canonical reconstruction of the input code string
    pub full_code: String,
    /// Resolved stem entries, in input order
    pub stem_results: Vec<DictionaryEntry>,
    /// Resolved extension entries, in input order
    pub extension_results: Vec<DictionaryEntry>,
    /// Narrative summary slot filled by the host's AI layer, never by this crate
    #[serde(default)]
    pub ai_interpretation: Option<String>,
}

/// Error types for decode requests
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The request contained no code tokens after normalization
    #[error("no codes supplied")]
    NoCodes,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
