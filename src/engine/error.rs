//! Macro invocation errors.

use thiserror::Error;

use crate::locale::LocaleError;

/// Failure of a single macro invocation.
///
/// A document missing from the store is not an error: macros degrade to an
/// empty fragment instead. Everything here is surfaced to the caller.
#[derive(Debug, Error)]
pub enum MacroError {
    #[error("unknown macro `{0}`")]
    UnknownMacro(String),

    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// Document store failure, propagated without retry.
    #[error("document store failed while looking up `{url}`")]
    Store {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to write HTML output")]
    Render(#[from] std::io::Error),

    #[error("rendered HTML is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_error_display() {
        let unknown = MacroError::UnknownMacro("NoSuchMacro".to_string());
        assert_eq!(unknown.to_string(), "unknown macro `NoSuchMacro`");

        let store = MacroError::Store {
            url: "/en-US/docs/Web".to_string(),
            source: anyhow::anyhow!("connection refused"),
        };
        assert!(store.to_string().contains("/en-US/docs/Web"));
        let source = std::error::Error::source(&store).unwrap();
        assert_eq!(source.to_string(), "connection refused");
    }

    #[test]
    fn test_locale_error_is_transparent() {
        let err = MacroError::from(LocaleError::MissingKey {
            key: "Guides".to_string(),
            locale: "es".to_string(),
            default_locale: "en-US".to_string(),
        });
        assert!(err.to_string().contains("missing localized string `Guides`"));
    }
}
