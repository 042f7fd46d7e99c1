//! `[locale]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[locale]` section in docmacro.toml - localized string tables.
///
/// # Example
/// ```toml
/// [locale]
/// default = "en-US"   # last step of every fallback chain
/// dir = "locales"     # one <locale>.toml per locale
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LocaleConfig {
    /// Locale used when the requested one lacks a key.
    #[serde(default = "defaults::locale::default")]
    #[educe(Default = defaults::locale::default())]
    pub default: String,

    /// Directory of string tables, relative to the config file.
    #[serde(default = "defaults::locale::dir")]
    #[educe(Default = defaults::locale::dir())]
    pub dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::DocmacroConfig;

    #[test]
    fn test_locale_config() {
        let config = DocmacroConfig::from_str(
            r#"
            [locale]
            default = "es"
            dir = "i18n"
        "#,
        )
        .unwrap();
        assert_eq!(config.locale.default, "es");
        assert_eq!(config.locale.dir.to_str(), Some("i18n"));
    }

    #[test]
    fn test_locale_config_defaults() {
        let config = DocmacroConfig::from_str("[locale]").unwrap();
        assert_eq!(config.locale.default, "en-US");
        assert_eq!(config.locale.dir.to_str(), Some("locales"));
    }
}
