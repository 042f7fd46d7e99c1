//! Built-in macro handlers.
//!
//! | Macro | Output |
//! |-------|--------|
//! | `HTTPSidebar` | disclosure-based navigation for the HTTP docs area |
//! | `Breadcrumbs` | ancestor-to-self ordered list |
//! | `SubpagesWithSummaries` | definition list of child pages with summaries |
//!
//! Each markup shape lives entirely inside its handler so it can change
//! without touching the engine.

mod breadcrumbs;
mod sidebar;
mod subpages;

pub use breadcrumbs::{BreadcrumbsMacro, render_breadcrumbs};
pub use sidebar::{HTTP_SIDEBAR, SectionSource, Sidebar, SidebarSection};
pub use subpages::SubpagesWithSummaries;

use crate::engine::MacroRegistry;

/// Registry holding every built-in macro.
pub fn builtin_registry() -> MacroRegistry {
    let mut registry = MacroRegistry::new();
    registry
        .register(HTTP_SIDEBAR)
        .register(BreadcrumbsMacro)
        .register(SubpagesWithSummaries);
    registry
}
