// Code decomposer - splits raw input into stem and extension tokens and
// resolves each token against the dictionary

use crate::dictionary::{CodeDictionary, DictionaryEntry};

use super::types::{DecodeError, DecodeInput, DecodedResult};

/// Description substituted for tokens with no dictionary entry
pub const NOT_FOUND_PLACEHOLDER: &str = "no dictionary entry";

/// Separator between tokens in combined-mode input
const TOKEN_SEPARATOR: char = '&';

/// Delimiter used to rebuild the full code string from separate-mode slots
const FULL_CODE_DELIMITER: &str = " & ";

/// Decode one request against the dictionary
///
/// Normalizes the input into ordered stem and extension token lists,
/// resolves each token's description, and rebuilds the full code string.
/// Combined-mode tokens are classified by the period rule; separate-mode
/// tokens keep the group of the slot they arrived in, with no period test.
///
/// # Errors
/// Returns `DecodeError::NoCodes` if no tokens remain after trimming.
pub fn decode(
    input: &DecodeInput,
    dictionary: &CodeDictionary,
) -> Result<DecodedResult, DecodeError> {
    let (full_code, stem_tokens, extension_tokens) = match input {
        DecodeInput::Combined { combined_string } => {
            let (stems, extensions) = classify_by_content(split_combined(combined_string));
            // Combined mode echoes the input string unchanged
            (combined_string.clone(), stems, extensions)
        }
        DecodeInput::Separate {
            stem_slots,
            extension_slots,
        } => {
            let stems = collect_slots(stem_slots);
            let extensions = collect_slots(extension_slots);
            let full_code = join_full_code(&stems, &extensions);
            (full_code, stems, extensions)
        }
    };

    if stem_tokens.is_empty() && extension_tokens.is_empty() {
        return Err(DecodeError::NoCodes);
    }

    Ok(DecodedResult {
        full_code,
        stem_results: resolve(&stem_tokens, dictionary),
        extension_results: resolve(&extension_tokens, dictionary),
        ai_interpretation: None,
    })
}

/// A token containing a period is a stem code; anything else is an extension
fn is_stem(token: &str) -> bool {
    token.contains('.')
}

/// Split combined input on the token separator, trimming pieces and
/// dropping blanks
fn split_combined(combined: &str) -> Vec<String> {
    combined
        .split(TOKEN_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Partition combined-mode tokens into stem and extension groups,
/// preserving relative order within each group
fn classify_by_content(tokens: Vec<String>) -> (Vec<String>, Vec<String>) {
    tokens.into_iter().partition(|token| is_stem(token))
}

/// Drop blank slots and trim the rest; in separate mode the slot sequence
/// of origin, not token content, decides the group
fn collect_slots(slots: &[String]) -> Vec<String> {
    slots
        .iter()
        .map(|slot| slot.trim())
        .filter(|slot| !slot.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rebuild the display code string: stem tokens first, then extensions
fn join_full_code(stems: &[String], extensions: &[String]) -> String {
    stems
        .iter()
        .chain(extensions.iter())
        .cloned()
        .collect::<Vec<_>>()
        .join(FULL_CODE_DELIMITER)
}

/// Resolve each token, substituting the placeholder on a lookup miss
fn resolve(tokens: &[String], dictionary: &CodeDictionary) -> Vec<DictionaryEntry> {
    tokens
        .iter()
        .map(|token| DictionaryEntry {
            code: token.clone(),
            description: dictionary
                .lookup(token)
                .unwrap_or(NOT_FOUND_PLACEHOLDER)
                .to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "decompose_test.rs"]
mod tests;
