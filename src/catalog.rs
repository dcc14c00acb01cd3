//! Locale catalog loading
//!
//! Reads the key→string tables the pages are translated with. The
//! contents are opaque to this crate; only the file format is fixed:
//!
//! ```text
//! # comment
//! en.auth_password_strength = Password strength:
//! en.password_strength.veryWeak = Very weak
//! ```
//!
//! The text before the first `.` is the language code, the rest of the
//! left-hand side is the key.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CATALOG_PATH_ENV: &str = "AUTH_UI_CATALOG_PATH";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read catalog file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Catalog file is empty")]
    EmptyFile,
    #[error("Malformed catalog entry on line {line}: expected `lang.key = value`")]
    Malformed { line: usize },
}

/// Returns the catalog file path.
///
/// Priority:
/// 1. Environment variable `AUTH_UI_CATALOG_PATH`
/// 2. Default path `./assets/locales.txt`
pub fn get_catalog_path() -> PathBuf {
    std::env::var(CATALOG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/locales.txt"))
}

/// Translation strings grouped by language code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleCatalog {
    entries: HashMap<String, HashMap<String, String>>,
}

impl LocaleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the catalog from [`get_catalog_path`].
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    /// - A line is not a `lang.key = value` entry
    pub fn load() -> Result<Self, CatalogError> {
        Self::load_from_path(get_catalog_path())
    }

    /// Loads the catalog from a specific file path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Catalog load FAILED: FileNotFound {:?}", path);
            return Err(CatalogError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let catalog = Self::parse(&content)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Catalog loaded: {} entries in {} languages from {:?}",
            catalog.len(),
            catalog.entries.len(),
            path
        );

        Ok(catalog)
    }

    /// Parses catalog text. Blank lines and `#` comments are skipped; empty
    /// values are dropped so lookups fall back to the caller's default.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        if content.trim().is_empty() {
            return Err(CatalogError::EmptyFile);
        }

        let mut catalog = Self::new();
        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let malformed = || CatalogError::Malformed { line: index + 1 };
            let (name, value) = line.split_once('=').ok_or_else(malformed)?;
            let (lang, key) = name.trim().split_once('.').ok_or_else(malformed)?;
            if lang.is_empty() || key.is_empty() {
                return Err(malformed());
            }

            catalog.insert(lang, key, value.trim());
        }

        Ok(catalog)
    }

    /// Adds or replaces one entry. Empty values are ignored.
    pub fn insert(&mut self, lang: &str, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.entries
            .entry(lang.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, lang: &str, key: &str) -> Option<&str> {
        self.entries
            .get(lang)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.entries.contains_key(lang)
    }

    /// Total number of entries across all languages.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
