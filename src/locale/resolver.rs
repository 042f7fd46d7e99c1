//! Locale fallback resolution.

use std::path::Path;

use super::error::LocaleError;
use super::table::LocaleTable;

/// Resolves `(locale, key)` pairs against a [`LocaleTable`].
///
/// The fallback chain is fixed for every caller: the requested locale, then
/// its base language (the part before `-` or `_`), then the default locale.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    table: LocaleTable,
    default_locale: String,
}

impl LocaleResolver {
    pub fn new(table: LocaleTable, default_locale: impl Into<String>) -> Self {
        Self {
            table,
            default_locale: default_locale.into(),
        }
    }

    /// Load all locale tables in `dir`. See [`LocaleTable::load_dir`].
    pub fn load_dir(dir: &Path, default_locale: &str) -> Result<Self, LocaleError> {
        Ok(Self::new(LocaleTable::load_dir(dir)?, default_locale))
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    /// Locales consulted for `locale`, in order, without duplicates.
    ///
    /// `es-MX` with default `en-US` → `["es-MX", "es", "en-US"]`
    pub fn fallback_chain<'a>(&'a self, locale: &'a str) -> Vec<&'a str> {
        let mut chain: Vec<&str> = Vec::with_capacity(3);
        let mut push = |candidate: &'a str| {
            if !candidate.is_empty() && !chain.iter().any(|c| c.eq_ignore_ascii_case(candidate)) {
                chain.push(candidate);
            }
        };

        push(locale);
        if let Some((language, _)) = locale.split_once(['-', '_']) {
            push(language);
        }
        push(self.default_locale.as_str());
        chain
    }

    /// Localized text for `key` in `locale`, following the fallback chain.
    ///
    /// A key absent from every table in the chain is a content defect and
    /// fails with [`LocaleError::MissingKey`].
    pub fn resolve(&self, locale: &str, key: &str) -> Result<&str, LocaleError> {
        self.fallback_chain(locale)
            .into_iter()
            .find_map(|candidate| self.table.get(candidate, key))
            .ok_or_else(|| LocaleError::MissingKey {
                key: key.to_string(),
                locale: locale.to_string(),
                default_locale: self.default_locale.clone(),
            })
    }
}
