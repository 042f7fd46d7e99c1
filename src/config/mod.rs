//! Engine configuration management for `docmacro.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[store]`   | Document fixture the store is loaded from    |
//! | `[locale]`  | Default locale and string table directory    |
//! | `[lint]`    | Lint policy for rendered fragments           |
//!
//! Every section and field is optional. Relative paths resolve against the
//! directory holding the config file (or the project root when there is no
//! config file).
//!
//! # Example
//!
//! ```toml
//! [store]
//! fixture = "fixtures/documents.json"
//!
//! [locale]
//! default = "en-US"
//! dir = "locales"
//!
//! [lint]
//! strict = true
//! disabled = ["inline-style"]
//! ```

pub mod defaults;
mod error;
mod lint;
mod locale;
mod store;

pub use error::ConfigError;
pub use lint::LintConfig;
pub use locale::LocaleConfig;
pub use store::StoreConfig;

use crate::document::MemoryStore;
use crate::engine::Engine;
use crate::locale::LocaleResolver;
use crate::log;
use anyhow::{Context, Result};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Root configuration structure representing docmacro.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DocmacroConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub locale: LocaleConfig,

    #[serde(default)]
    pub lint: LintConfig,
}

impl DocmacroConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path, resolving paths next to it
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = normalize_path(path);
        let base = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.resolve_paths(&base);
        Ok(config)
    }

    /// Load `config` under `root`, falling back to defaults when it is absent.
    pub fn load(root: &Path, config: &Path) -> Result<Self> {
        let path = root.join(config);
        if path.exists() {
            return Self::from_path(&path)
                .with_context(|| format!("failed to load `{}`", path.display()));
        }

        log!("config"; "`{}` not found, using defaults", path.display());
        let mut config = Self {
            config_path: normalize_path(&path),
            ..Self::default()
        };
        config.resolve_paths(&normalize_path(root));
        Ok(config)
    }

    /// Make every relative path absolute against `base`.
    fn resolve_paths(&mut self, base: &Path) {
        self.store.fixture = normalize_path(&base.join(&self.store.fixture));
        self.locale.dir = normalize_path(&base.join(&self.locale.dir));
    }

    /// Validate configuration before building an engine from it
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locale.default.trim().is_empty() {
            return Err(ConfigError::Validation(
                "[locale.default] must not be empty".into(),
            ));
        }
        if !self.store.fixture.is_file() {
            return Err(ConfigError::MissingPath {
                field: "[store.fixture]",
                path: self.store.fixture.clone(),
            });
        }
        if !self.locale.dir.is_dir() {
            return Err(ConfigError::MissingPath {
                field: "[locale.dir]",
                path: self.locale.dir.clone(),
            });
        }
        Ok(())
    }

    /// Engine with the built-in macros over the configured collaborators.
    pub fn engine(&self) -> Result<Engine> {
        self.validate()?;

        let store = MemoryStore::load_json(&self.store.fixture)?;
        let locales = LocaleResolver::load_dir(&self.locale.dir, &self.locale.default)
            .with_context(|| format!("failed to load locales from `{}`", self.locale.dir.display()))?;
        log!(
            "config";
            "{} documents, {} locales (default {})",
            store.len(),
            locales.table().locales().count(),
            locales.default_locale()
        );

        Ok(Engine::with_builtins(Arc::new(store), Arc::new(locales)))
    }
}

/// Normalize a path to absolute, using canonicalize if the path exists
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}
