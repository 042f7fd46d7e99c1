//! Static macro registry.

use std::sync::Arc;

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use super::context::MacroContext;
use super::error::MacroError;

/// Rendering logic of one macro.
#[async_trait]
pub trait Macro: Send + Sync {
    /// Name the macro is invoked by (e.g., "HTTPSidebar").
    fn name(&self) -> &'static str;

    /// Render an HTML fragment. Store misses should produce an empty or
    /// minimal fragment rather than an error.
    async fn render(&self, ctx: &MacroContext) -> Result<String, MacroError>;
}

/// Mapping from macro name to handler, filled once at startup.
///
/// Names match case-insensitively.
#[derive(Clone, Default)]
pub struct MacroRegistry {
    handlers: FxHashMap<String, Arc<dyn Macro>>,
}

impl MacroRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own name, replacing any previous one.
    pub fn register(&mut self, handler: impl Macro + 'static) -> &mut Self {
        self.handlers
            .insert(handler.name().to_lowercase(), Arc::new(handler));
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Macro>> {
        self.handlers.get(&name.to_lowercase()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(&name.to_lowercase())
    }

    /// Registered names as declared by their handlers, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.values().map(|h| h.name()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for MacroRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacroRegistry")
            .field("macros", &self.names())
            .finish()
    }
}
