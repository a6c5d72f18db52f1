// ICHI intervention code decoding core - code decomposition and dictionary lookup
// The presentation layer (page layout, form widgets, file pickers, clipboard)
// lives in the host application and calls in through the commands module.

pub mod commands;
pub mod decoder;
pub mod dictionary;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use decoder::{decode, DecodeError, DecodeInput, DecodedResult, NOT_FOUND_PLACEHOLDER};
pub use dictionary::{CodeDictionary, CommaDelimitedParser, DictionaryEntry, RecordParser};
