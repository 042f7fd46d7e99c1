//! Data types returned by the document store.

use serde::{Deserialize, Serialize};

/// Immutable snapshot of one document's metadata.
///
/// Returned by [`DocumentStore`](super::DocumentStore) queries; macros read it
/// but never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document url (e.g., "/en-US/docs/Web/HTTP/Overview")
    pub url: String,

    /// Document title
    pub title: String,

    /// Locale the document is written in
    pub locale: String,

    /// Plain-text summary
    #[serde(default)]
    pub summary: String,

    /// Slug below the locale docs root (e.g., "Web/HTTP/Overview")
    #[serde(default)]
    pub slug: String,

    /// Tags in authoring order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl DocumentSummary {
    /// Lowercased url, the key used for case-insensitive lookups.
    pub fn key(&self) -> String {
        self.url.to_lowercase()
    }
}

/// One step in an ancestor-to-self navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub uri: String,
    pub title: String,
}

impl From<&DocumentSummary> for Breadcrumb {
    fn from(doc: &DocumentSummary) -> Self {
        Self {
            uri: doc.url.clone(),
            title: doc.title.clone(),
        }
    }
}
