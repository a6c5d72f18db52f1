// Code dictionary module - stores and queries intervention code descriptions

mod import;
mod seed;
mod store;

pub use import::{CommaDelimitedParser, RecordParser};
pub use store::{CodeDictionary, DictionaryEntry};
