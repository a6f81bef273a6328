use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const PREFERENCE_VERSION: u32 = 1;

/// Errors raised while reading or writing the language preference.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to read preference {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse preference {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize preference {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write preference {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to prepare directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 持久化的唯一偏好值：使用者選擇的語言代碼。 / The single persisted
/// preference: the user's chosen language code. Absence marks a first visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePreference {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub lang: Option<String>,
}

fn default_version() -> u32 {
    PREFERENCE_VERSION
}

impl Default for LanguagePreference {
    fn default() -> Self {
        Self {
            version: PREFERENCE_VERSION,
            lang: None,
        }
    }
}

impl LanguagePreference {
    /// 修正不合法內容：未知或空白語言代碼視為未選擇。 / Repairs invalid
    /// content: unknown or blank codes degrade to "nothing chosen".
    pub fn sanitize(&mut self) {
        if self.version == 0 {
            self.version = PREFERENCE_VERSION;
        }
        if let Some(code) = self.lang.take() {
            let trimmed = code.trim();
            if regionality_i18n::is_supported(trimmed) {
                self.lang = Some(trimmed.to_string());
            }
        }
    }
}

/// 語言偏好的檔案儲存器；寫入採 tmp 檔改名的原子方式。 / File-backed store
/// for the language preference; writes go through an atomic tmp-then-rename.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    data: LanguagePreference,
}

impl PreferenceStore {
    /// 載入偏好；檔案不存在時視為首次造訪。 / Loads the preference, treating
    /// a missing file as a first visit.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                data: LanguagePreference::default(),
            });
        }
        let contents = fs::read_to_string(&path).map_err(|source| PreferenceError::Read {
            path: path.clone(),
            source,
        })?;
        let mut data: LanguagePreference =
            serde_json::from_str(&contents).map_err(|source| PreferenceError::Parse {
                path: path.clone(),
                source,
            })?;
        data.sanitize();
        Ok(Self { path, data })
    }

    /// 目前儲存的語言代碼。 / The persisted code, when one exists.
    pub fn lang(&self) -> Option<&str> {
        self.data.lang.as_deref()
    }

    /// 記錄新的語言代碼並立即寫回。 / Records a new code and persists it
    /// immediately.
    pub fn set_lang(&mut self, code: &str) -> Result<(), PreferenceError> {
        self.data.lang = Some(code.to_string());
        self.data.sanitize();
        self.save()
    }

    /// 清除偏好並同步儲存。 / Clears the preference and persists the change.
    pub fn clear(&mut self) -> Result<(), PreferenceError> {
        self.data.lang = None;
        self.save()
    }

    fn save(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PreferenceError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = serde_json::to_string_pretty(&self.data).map_err(|source| {
            PreferenceError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, payload.as_bytes()).map_err(|source| PreferenceError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| PreferenceError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// 偏好檔案的路徑。 / Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
