// Command implementation logic - testable functions separate from any host wrapper

use std::sync::Mutex;

use crate::decoder::{self, DecodeError, DecodeInput, DecodedResult};
use crate::dictionary::{CodeDictionary, DictionaryEntry};

/// Type alias for the shared dictionary state managed by the host
pub type DictionaryState = Mutex<CodeDictionary>;

/// Map DecodeError to user-friendly error messages
fn to_user_error(error: DecodeError) -> String {
    match error {
        DecodeError::NoCodes => "Enter at least one code to decode".to_string(),
    }
}

/// Implementation of initialize_dictionary
///
/// Seeds the store from the built-in table. Invoked once at application
/// startup.
///
/// # Returns
/// The entry count after seeding
///
/// # Errors
/// Returns an error string if the state lock is poisoned.
pub fn initialize_dictionary_impl(state: &DictionaryState) -> Result<usize, String> {
    let mut dictionary = state
        .lock()
        .map_err(|_| "Failed to access dictionary store".to_string())?;

    let size = dictionary.initialize();
    crate::info!("Dictionary initialized with {} entries", size);
    Ok(size)
}

/// Implementation of import_dictionary
///
/// Merges comma-delimited text supplied by the host; file I/O and UTF-8
/// decoding are the host's responsibility, this only parses the content.
///
/// # Returns
/// The number of records inserted (malformed lines are skipped and not
/// counted)
///
/// # Errors
/// Returns an error string if the state lock is poisoned.
pub fn import_dictionary_impl(state: &DictionaryState, text: &str) -> Result<usize, String> {
    let mut dictionary = state
        .lock()
        .map_err(|_| "Failed to access dictionary store".to_string())?;

    let imported = dictionary.merge_from_delimited_text(text);
    crate::info!("Imported {} dictionary records", imported);
    Ok(imported)
}

/// Implementation of dictionary_size
///
/// # Returns
/// The current count of distinct codes held
pub fn dictionary_size_impl(state: &DictionaryState) -> Result<usize, String> {
    let dictionary = state
        .lock()
        .map_err(|_| "Failed to access dictionary store".to_string())?;

    Ok(dictionary.len())
}

/// Implementation of export_dictionary
///
/// Materializes a snapshot of every entry for the host's export and
/// seed-regeneration workflows; formatting and serialization of the
/// snapshot belong to the host.
pub fn export_dictionary_impl(state: &DictionaryState) -> Result<Vec<DictionaryEntry>, String> {
    let dictionary = state
        .lock()
        .map_err(|_| "Failed to access dictionary store".to_string())?;

    Ok(dictionary.export_all())
}

/// Implementation of decode_code
///
/// The single entry point the host calls on a user-triggered search.
///
/// # Errors
/// Returns an error string if no code tokens were supplied or the state
/// lock is poisoned.
pub fn decode_code_impl(
    state: &DictionaryState,
    input: &DecodeInput,
) -> Result<DecodedResult, String> {
    let dictionary = state
        .lock()
        .map_err(|_| "Failed to access dictionary store".to_string())?;

    decoder::decode(input, &dictionary).map_err(to_user_error)
}

#[cfg(test)]
#[path = "logic_test.rs"]
mod tests;
