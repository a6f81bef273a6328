//! Language dictionaries for the Regionality site.
//! Regionality 網站的語言字典。

pub mod dictionary;
pub mod registry;
pub mod store;

pub use dictionary::{DictValue, Dictionary};
pub use registry::{
    detect, find, is_supported, match_locale, LanguageDescriptor, DEFAULT_LANGUAGE, LANGUAGES,
};
pub use store::{DictionaryError, DictionaryStore};
