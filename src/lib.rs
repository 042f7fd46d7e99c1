//! docmacro - macro expansion for wiki-style documentation.
//!
//! Pages embed directives such as `{{ HTTPSidebar }}`. The [`engine`] maps a
//! directive name to a handler, gives it a read-only view of the document
//! corpus and the localized strings, and returns an HTML fragment that the
//! [`lint`] validator can check before it is spliced into the page.
//!
//! ```text
//! source ──► expand::scan ──► Engine::render ──► Macro ──► HTML ──► lint
//!                                  │
//!                                  ├── DocumentStore (find_by_url, find_children)
//!                                  └── LocaleResolver (fallback chain)
//! ```

pub mod logger;

pub mod bookmarks;
pub mod config;
pub mod document;
pub mod engine;
pub mod expand;
pub mod html;
pub mod lint;
pub mod locale;
pub mod macros;

#[cfg(test)]
mod testing;
