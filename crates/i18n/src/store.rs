use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dictionary::{DictValue, Dictionary};

/// Errors raised while loading a language dictionary.
/// （載入語言字典時可能回傳的錯誤。）
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read language file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse language file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
struct ActiveDictionary {
    code: String,
    dictionary: Dictionary,
}

/// Holds the currently loaded dictionary and resolves dotted lookup paths.
/// Exactly one dictionary is current at any time; [`DictionaryStore::load`]
/// replaces it atomically and leaves it untouched on any failure.
/// （保存目前載入的字典並解析點路徑；任何時刻恰有一份字典生效，載入失敗時
/// 原字典維持不變。）
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    dir: PathBuf,
    active: Option<ActiveDictionary>,
}

impl DictionaryStore {
    /// Creates a store addressing dictionaries as `<dir>/<code>.json`.
    /// （建立以 `<dir>/<code>.json` 定位字典的儲存器。）
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            active: None,
        }
    }

    /// Path the given language code resolves to.
    pub fn dictionary_path(&self, code: &str) -> PathBuf {
        self.dir.join(format!("{code}.json"))
    }

    /// Loads the dictionary for `code`, replacing the current one only after
    /// the whole file has been read and parsed successfully.
    /// （載入 `code` 的字典；僅在整份檔案讀取並解析成功後才替換現行字典。）
    pub fn load(&mut self, code: &str) -> Result<(), DictionaryError> {
        let path = self.dictionary_path(code);
        let contents = fs::read_to_string(&path).map_err(|source| DictionaryError::Read {
            path: path.clone(),
            source,
        })?;
        let dictionary: Dictionary =
            serde_json::from_str(&contents).map_err(|source| DictionaryError::Parse { path, source })?;
        self.active = Some(ActiveDictionary {
            code: code.to_string(),
            dictionary,
        });
        Ok(())
    }

    /// True once a dictionary has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.active.is_some()
    }

    /// Code of the active language, when one is loaded.
    pub fn active_code(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.code.as_str())
    }

    /// The active dictionary, when one is loaded.
    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.active.as_ref().map(|active| &active.dictionary)
    }

    /// Resolves display text through the active dictionary; with none loaded
    /// the path string itself comes back, the same degradation as a miss.
    /// （經由現行字典解析顯示文字；尚未載入字典時同樣回傳路徑字串。）
    pub fn text<'a>(&'a self, path: &'a str) -> Cow<'a, str> {
        match &self.active {
            Some(active) => active.dictionary.text(path),
            None => Cow::Borrowed(path),
        }
    }

    /// Resolves a list through the active dictionary, empty when absent.
    pub fn list(&self, path: &str) -> &[DictValue] {
        match &self.active {
            Some(active) => active.dictionary.list(path),
            None => &[],
        }
    }

    /// Directory the store reads dictionaries from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
