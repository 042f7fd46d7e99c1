//! Locale error types.

use std::path::PathBuf;
use thiserror::Error;

/// Locale loading and lookup errors
#[derive(Debug, Error)]
pub enum LocaleError {
    /// A required key is missing from the default locale table.
    /// This is a content defect, never silently replaced with empty text.
    #[error("missing localized string `{key}` (requested `{locale}`, default `{default_locale}`)")]
    MissingKey {
        key: String,
        locale: String,
        default_locale: String,
    },

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("locale file parsing error in `{0}`")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("failed to scan locale directory")]
    Walk(#[from] walkdir::Error),
}
