//! Read-only access to the documentation corpus.
//!
//! Macros never touch the corpus directly. They go through the
//! [`DocumentStore`] trait, which answers two questions:
//!
//! | Query | Result |
//! |-------|--------|
//! | `find_by_url(url)` | the document at `url`, or `None` (a normal outcome) |
//! | `find_children(url)` | immediate children, one path segment deeper |
//!
//! Urls are compared case-insensitively everywhere.
//!
//! [`MemoryStore`] is the bundled implementation, loaded from a JSON fixture
//! keyed by lowercased url:
//!
//! ```json
//! {
//!   "/en-us/docs/web/http/overview": {
//!     "url": "/en-US/docs/Web/HTTP/Overview",
//!     "title": "An overview of HTTP",
//!     "locale": "en-US",
//!     "summary": "HTTP is a protocol for fetching resources.",
//!     "slug": "Web/HTTP/Overview",
//!     "tags": ["HTTP", "Overview"]
//!   }
//! }
//! ```

mod store;
mod types;
pub mod url;

pub use store::{DocumentStore, MemoryStore};
pub use types::{Breadcrumb, DocumentSummary};
