// Host boundary module
// The host's UI wrappers call these functions; the actual logic is in
// logic.rs which is fully tested.

pub mod logic;

pub use logic::{
    decode_code_impl, dictionary_size_impl, export_dictionary_impl, import_dictionary_impl,
    initialize_dictionary_impl, DictionaryState,
};
