//! Document store interface and its in-memory implementation.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use parking_lot::RwLock;

use super::types::DocumentSummary;
use super::url;

/// Read-only query interface over the documentation corpus.
///
/// Implementations may be remote or slow; every call is async. A missing
/// document is `Ok(None)`, never an error. Errors are reserved for transport
/// or backend failures and are propagated to the macro caller untouched.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Exact, case-insensitive lookup.
    async fn find_by_url(&self, url: &str) -> Result<Option<DocumentSummary>>;

    /// Immediate children of `url`, in store-defined order. Empty when none.
    async fn find_children(&self, url: &str) -> Result<Vec<DocumentSummary>>;
}

/// Thread-safe in-memory document store.
///
/// Documents are keyed by lowercased url. Children are derived at query time
/// from the full key set and come back in ascending key order.
///
/// # Thread Safety
///
/// Uses `RwLock` to allow:
/// - Multiple concurrent reads (any number of macro invocations)
/// - Exclusive writes (loading or inserting documents)
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<BTreeMap<String, DocumentSummary>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON fixture (`{ "<url>": DocumentSummary, ... }`).
    ///
    /// Object keys are ignored in favour of each document's own `url`,
    /// so fixtures keyed by either case load the same way.
    pub fn from_json(content: &str) -> Result<Self> {
        let fixture: BTreeMap<String, DocumentSummary> =
            serde_json::from_str(content).context("invalid document fixture")?;
        let store = Self::new();
        for doc in fixture.into_values() {
            store.insert(doc);
        }
        Ok(store)
    }

    /// Load a JSON fixture from disk.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read document fixture `{}`", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("failed to load document fixture `{}`", path.display()))
    }

    /// Insert or replace a document. The lowercased url is the key.
    pub fn insert(&self, doc: DocumentSummary) {
        self.documents.write().insert(url::key(&doc.url), doc);
    }

    /// Get the number of documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Check if the store has any documents.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    fn get(&self, url: &str) -> Option<DocumentSummary> {
        self.documents.read().get(&url::key(url)).cloned()
    }

    fn children(&self, url: &str) -> Vec<DocumentSummary> {
        let parent = url::key(url);
        self.documents
            .read()
            .iter()
            .filter(|(key, _)| url::is_immediate_child(&parent, key))
            .map(|(_, doc)| doc.clone())
            .collect()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_by_url(&self, url: &str) -> Result<Option<DocumentSummary>> {
        Ok(self.get(url))
    }

    async fn find_children(&self, url: &str) -> Result<Vec<DocumentSummary>> {
        Ok(self.children(url))
    }
}
