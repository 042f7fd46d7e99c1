//! Per-invocation environment and context.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::document::{DocumentStore, DocumentSummary};
use crate::locale::LocaleResolver;

use super::error::MacroError;

/// Caller-supplied inputs of one macro invocation.
///
/// Built fresh for every call and moved into the context, so no two
/// invocations ever share one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroEnvironment {
    /// Url of the document the macro is rendered into
    pub url: String,

    /// Requested locale (e.g., "en-US")
    pub locale: String,

    /// Named and positional (`$0`, `$1`, ...) parameters
    pub params: BTreeMap<String, String>,
}

impl MacroEnvironment {
    pub fn new(url: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            locale: locale.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a parameter (builder style).
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Positional argument `index` (stored as `$index`).
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.param(&format!("${index}"))
    }
}

/// Everything a macro handler may use while rendering.
///
/// The collaborators are only reachable through the lookup methods below,
/// which attach the failing url to store errors.
pub struct MacroContext {
    env: MacroEnvironment,
    store: Arc<dyn DocumentStore>,
    locales: Arc<LocaleResolver>,
}

impl MacroContext {
    pub fn new(
        env: MacroEnvironment,
        store: Arc<dyn DocumentStore>,
        locales: Arc<LocaleResolver>,
    ) -> Self {
        Self {
            env,
            store,
            locales,
        }
    }

    pub fn env(&self) -> &MacroEnvironment {
        &self.env
    }

    pub fn locale(&self) -> &str {
        &self.env.locale
    }

    pub fn url(&self) -> &str {
        &self.env.url
    }

    pub async fn find_by_url(&self, url: &str) -> Result<Option<DocumentSummary>, MacroError> {
        self.store
            .find_by_url(url)
            .await
            .map_err(|source| MacroError::Store {
                url: url.to_string(),
                source,
            })
    }

    pub async fn find_children(&self, url: &str) -> Result<Vec<DocumentSummary>, MacroError> {
        self.store
            .find_children(url)
            .await
            .map_err(|source| MacroError::Store {
                url: url.to_string(),
                source,
            })
    }

    /// Localized text for `key` in the requested locale.
    pub fn localize(&self, key: &str) -> Result<&str, MacroError> {
        Ok(self.locales.resolve(&self.env.locale, key)?)
    }
}
