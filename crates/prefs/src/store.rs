//! Persisted preferences (JSON object of string keys on local disk).
//!
//! Read once at startup, written through on every change.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use storefront_currency::Currency;

use crate::language::Language;

pub const CURRENCY_KEY: &str = "currency";
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preferences io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preferences encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl Preferences {
    /// `<config dir>/storefront/prefs.json`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("storefront").join("prefs.json"))
    }

    /// Load preferences from `path`.
    ///
    /// A missing file is a first run; an unreadable or corrupt file is logged
    /// and replaced on the next write. Either way the defaults apply.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(values) => values,
                Err(err) => {
                    tracing::warn!(?path, error = %err, "ignoring corrupt preferences file");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                tracing::warn!(?path, error = %err, "could not read preferences; using defaults");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set `key` and persist immediately.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.into());
        self.persist()
    }

    pub fn currency(&self) -> Currency {
        self.parsed(CURRENCY_KEY)
    }

    pub fn set_currency(&mut self, currency: Currency) -> Result<(), PrefsError> {
        self.set(CURRENCY_KEY, currency.code())
    }

    pub fn language(&self) -> Language {
        self.parsed(LANGUAGE_KEY)
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), PrefsError> {
        self.set(LANGUAGE_KEY, language.code())
    }

    fn parsed<T>(&self, key: &str) -> T
    where
        T: core::str::FromStr + Default,
        T::Err: core::fmt::Display,
    {
        match self.get(key) {
            None => T::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(key, error = %err, "unrecognised stored preference; using default");
                T::default()
            }),
        }
    }

    fn persist(&self) -> Result<(), PrefsError> {
        let io_err = |source: std::io::Error| PrefsError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(&self.values)?;

        // The file on disk is always a complete document.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, body).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir()
            .join(format!("storefront-prefs-{}-{name}-{nanos}", std::process::id()))
            .join("prefs.json")
    }

    #[test]
    fn missing_file_yields_defaults() {
        let prefs = Preferences::open(scratch_path("missing"));
        assert_eq!(prefs.currency(), Currency::Usd);
        assert_eq!(prefs.language(), Language::En);
    }

    #[test]
    fn changes_survive_reopen() {
        let path = scratch_path("roundtrip");
        let mut prefs = Preferences::open(&path);
        prefs.set_currency(Currency::Try).unwrap();
        prefs.set_language(Language::Tr).unwrap();

        let reopened = Preferences::open(&path);
        assert_eq!(reopened.currency(), Currency::Try);
        assert_eq!(reopened.language(), Language::Tr);
        assert_eq!(reopened.get(CURRENCY_KEY), Some("TRY"));

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let path = scratch_path("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let prefs = Preferences::open(&path);
        assert_eq!(prefs.currency(), Currency::Usd);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn unknown_stored_code_falls_back_to_default() {
        let path = scratch_path("unknown");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"currency": "XYZ", "language": "de"}"#).unwrap();

        let prefs = Preferences::open(&path);
        assert_eq!(prefs.currency(), Currency::Usd);
        assert_eq!(prefs.language(), Language::En);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
