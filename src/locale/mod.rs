//! Localized UI strings for macro output.
//!
//! Every macro resolves its visible text through one [`LocaleResolver`], so
//! all macros share the same fallback policy:
//!
//! ```text
//! requested locale ──► base language ──► default locale ──► LocaleError::MissingKey
//!     "es-MX"              "es"             "en-US"
//! ```
//!
//! Tables are loaded from a directory holding one flat TOML file per locale,
//! named after the locale code:
//!
//! ```toml
//! # locales/es.toml
//! ResourcesURI = "Recursos y URIs"
//! ```

mod error;
mod resolver;
mod table;

pub use error::LocaleError;
pub use resolver::LocaleResolver;
pub use table::LocaleTable;
