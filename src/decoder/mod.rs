// Code decomposition module - turns raw user input into classified,
// dictionary-resolved code components

mod decompose;
mod types;

pub use decompose::{decode, NOT_FOUND_PLACEHOLDER};
pub use types::{DecodeError, DecodeInput, DecodedResult};
