//! Locale string tables.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::error::LocaleError;

/// Strings of a single locale, keyed by string id.
#[derive(Debug, Clone, Default)]
struct LocaleStrings {
    /// Locale code as written by the author (e.g., "en-US")
    code: String,
    strings: BTreeMap<String, String>,
}

/// Mapping from locale code to its localized strings.
///
/// Locale codes match case-insensitively (`en-us` finds `en-US`);
/// string keys match exactly.
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    locales: BTreeMap<String, LocaleStrings>,
}

impl LocaleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add strings for `locale`, merging with any already present.
    pub fn insert<K, V>(&mut self, locale: &str, strings: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entry = self
            .locales
            .entry(locale.to_lowercase())
            .or_insert_with(|| LocaleStrings {
                code: locale.to_string(),
                strings: BTreeMap::new(),
            });
        entry
            .strings
            .extend(strings.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<K, V>(mut self, locale: &str, strings: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(locale, strings);
        self
    }

    /// Look up `key` in exactly `locale`, without fallback.
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(&locale.to_lowercase())
            .and_then(|l| l.strings.get(key))
            .map(String::as_str)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(&locale.to_lowercase())
    }

    /// Locale codes in the table, in case-insensitive order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.values().map(|l| l.code.as_str())
    }

    /// Parse one flat `key = "text"` TOML table and add it under `locale`.
    pub fn insert_toml(&mut self, locale: &str, content: &str, path: &Path) -> Result<(), LocaleError> {
        let strings: BTreeMap<String, String> =
            toml::from_str(content).map_err(|err| LocaleError::Parse(path.to_path_buf(), err))?;
        self.insert(locale, strings);
        Ok(())
    }

    /// Load every `<locale>.toml` file directly inside `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, LocaleError> {
        let mut table = Self::new();

        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "toml") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content =
                fs::read_to_string(path).map_err(|err| LocaleError::Io(path.to_path_buf(), err))?;
            table.insert_toml(locale, &content, path)?;
        }

        Ok(table)
    }
}
