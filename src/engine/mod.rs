//! Macro execution engine.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  Engine::render(name, env)                                         │
//! │                                                                    │
//! │  ┌──────────────┐   ┌────────────────────┐   ┌──────────────────┐  │
//! │  │ MacroRegistry│──►│ MacroContext       │──►│ Macro::render    │  │
//! │  │ (by name)    │   │ env + store + i18n │   │ (HTML fragment)  │  │
//! │  └──────────────┘   └────────────────────┘   └──────────────────┘  │
//! │        │                                          │                │
//! │        └── UnknownMacro                           ├── DocumentStore│
//! │                                                   └── LocaleResolver
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine owns no mutable state. Each call builds its own context, so
//! renders can run concurrently as independent tasks and be dropped at any
//! await point without cleanup.

mod context;
mod error;
mod registry;

pub use context::{MacroContext, MacroEnvironment};
pub use error::MacroError;
pub use registry::{Macro, MacroRegistry};

use std::sync::Arc;

use crate::document::DocumentStore;
use crate::locale::LocaleResolver;

/// Renders macros by name against injected collaborators.
///
/// Cloning is cheap; clones share the registry and collaborators.
#[derive(Clone)]
pub struct Engine {
    registry: Arc<MacroRegistry>,
    store: Arc<dyn DocumentStore>,
    locales: Arc<LocaleResolver>,
}

impl Engine {
    pub fn new(
        registry: MacroRegistry,
        store: Arc<dyn DocumentStore>,
        locales: Arc<LocaleResolver>,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            store,
            locales,
        }
    }

    /// Engine with every built-in macro registered.
    pub fn with_builtins(store: Arc<dyn DocumentStore>, locales: Arc<LocaleResolver>) -> Self {
        Self::new(crate::macros::builtin_registry(), store, locales)
    }

    pub fn registry(&self) -> &MacroRegistry {
        &self.registry
    }

    /// Render macro `name` for `env`.
    ///
    /// Fails with [`MacroError::UnknownMacro`] when no handler is registered.
    pub async fn render(&self, name: &str, env: MacroEnvironment) -> Result<String, MacroError> {
        let Some(handler) = self.registry.get(name) else {
            return Err(MacroError::UnknownMacro(name.to_string()));
        };

        let ctx = MacroContext::new(env, Arc::clone(&self.store), Arc::clone(&self.locales));
        handler.render(&ctx).await
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .field("default_locale", &self.locales.default_locale())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[tokio::test]
    async fn test_unknown_macro() {
        let engine = testing::engine();
        let err = engine
            .render("NoSuchMacro", MacroEnvironment::new(testing::OVERVIEW_URL, "en-US"))
            .await
            .unwrap_err();
        assert!(matches!(err, MacroError::UnknownMacro(ref name) if name == "NoSuchMacro"));
    }

    #[tokio::test]
    async fn test_render_is_deterministic() {
        let engine = testing::engine();
        let env = MacroEnvironment::new(testing::OVERVIEW_URL, "en-US");

        let first = engine.render("HTTPSidebar", env.clone()).await.unwrap();
        let second = engine.render("HTTPSidebar", env).await.unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_concurrent_renders_match_sequential() {
        let engine = testing::engine();
        let expected = engine
            .render("HTTPSidebar", MacroEnvironment::new(testing::OVERVIEW_URL, "es"))
            .await
            .unwrap();

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let engine = engine.clone();
                tokio::spawn(async move {
                    engine
                        .render("httpsidebar", MacroEnvironment::new(testing::OVERVIEW_URL, "es"))
                        .await
                })
            })
            .collect();

        for task in tasks {
            assert_eq!(task.await.unwrap().unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let engine = Engine::with_builtins(Arc::new(testing::FailingStore), testing::locales());
        let err = engine
            .render("HTTPSidebar", MacroEnvironment::new(testing::OVERVIEW_URL, "en-US"))
            .await
            .unwrap_err();
        assert!(matches!(err, MacroError::Store { .. }));
    }

    #[test]
    fn test_builtins_registered() {
        let engine = testing::engine();
        assert_eq!(
            engine.registry().names(),
            vec!["Breadcrumbs", "HTTPSidebar", "SubpagesWithSummaries"]
        );
    }
}
