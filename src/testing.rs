//! Shared fixtures for unit tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::document::{DocumentStore, DocumentSummary, MemoryStore};
use crate::engine::Engine;
use crate::locale::{LocaleResolver, LocaleTable};

pub const OVERVIEW_URL: &str = "/en-US/docs/Web/HTTP/Overview";

/// A small slice of the HTTP docs tree in two locales.
///
/// There is deliberately no `Web/HTTP/Status` page, so the status codes
/// section of the sidebar always comes out empty.
pub const HTTP_FIXTURE_JSON: &str = r#"{
  "/en-US/docs/Web": {
    "url": "/en-US/docs/Web",
    "title": "Web technology for developers",
    "locale": "en-US",
    "slug": "Web"
  },
  "/en-US/docs/Web/HTTP": {
    "url": "/en-US/docs/Web/HTTP",
    "title": "HTTP",
    "locale": "en-US",
    "slug": "Web/HTTP",
    "summary": "Hypertext Transfer Protocol (HTTP) is an application-layer protocol."
  },
  "/en-US/docs/Web/HTTP/Overview": {
    "url": "/en-US/docs/Web/HTTP/Overview",
    "title": "An overview of HTTP",
    "locale": "en-US",
    "slug": "Web/HTTP/Overview",
    "tags": ["HTTP", "Overview"]
  },
  "/en-US/docs/Web/HTTP/Overview/Identifying_resources_on_the_Web": {
    "url": "/en-US/docs/Web/HTTP/Overview/Identifying_resources_on_the_Web",
    "title": "Identifying resources on the Web",
    "locale": "en-US",
    "slug": "Web/HTTP/Overview/Identifying_resources_on_the_Web",
    "summary": "The target of an HTTP request is called a resource."
  },
  "/en-US/docs/Web/HTTP/Overview/Data_URLs": {
    "url": "/en-US/docs/Web/HTTP/Overview/Data_URLs",
    "title": "Data URLs",
    "locale": "en-US",
    "slug": "Web/HTTP/Overview/Data_URLs",
    "summary": "Embed small files inline with the data: scheme & a MIME type."
  },
  "/en-US/docs/Web/HTTP/Headers": {
    "url": "/en-US/docs/Web/HTTP/Headers",
    "title": "HTTP headers",
    "locale": "en-US",
    "slug": "Web/HTTP/Headers"
  },
  "/en-US/docs/Web/HTTP/Headers/Accept": {
    "url": "/en-US/docs/Web/HTTP/Headers/Accept",
    "title": "Accept",
    "locale": "en-US",
    "slug": "Web/HTTP/Headers/Accept",
    "summary": "Content types the client is able to understand."
  },
  "/en-US/docs/Web/HTTP/Methods": {
    "url": "/en-US/docs/Web/HTTP/Methods",
    "title": "HTTP request methods",
    "locale": "en-US",
    "slug": "Web/HTTP/Methods"
  },
  "/en-US/docs/Web/HTTP/Methods/GET": {
    "url": "/en-US/docs/Web/HTTP/Methods/GET",
    "title": "GET",
    "locale": "en-US",
    "slug": "Web/HTTP/Methods/GET",
    "summary": "Requests a representation of the specified resource."
  },
  "/es/docs/Web/HTTP/Headers": {
    "url": "/es/docs/Web/HTTP/Headers",
    "title": "Cabeceras HTTP",
    "locale": "es",
    "slug": "Web/HTTP/Headers"
  },
  "/es/docs/Web/HTTP/Headers/Accept": {
    "url": "/es/docs/Web/HTTP/Headers/Accept",
    "title": "Accept",
    "locale": "es",
    "slug": "Web/HTTP/Headers/Accept"
  }
}"#;

pub fn doc(url: &str, title: &str) -> DocumentSummary {
    DocumentSummary {
        url: url.to_string(),
        title: title.to_string(),
        locale: "en-US".to_string(),
        summary: String::new(),
        slug: String::new(),
        tags: vec![],
    }
}

pub fn store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::from_json(HTTP_FIXTURE_JSON).unwrap())
}

pub fn locales() -> Arc<LocaleResolver> {
    let table = LocaleTable::new()
        .with(
            "en-US",
            [
                ("ResourcesURI", "Resources and URIs"),
                ("Headers", "HTTP headers"),
                ("Methods", "HTTP request methods"),
                ("StatusCodes", "HTTP response status codes"),
            ],
        )
        .with(
            "es",
            [
                ("ResourcesURI", "Recursos y URIs"),
                ("Headers", "Cabeceras HTTP"),
            ],
        );
    Arc::new(LocaleResolver::new(table, "en-US"))
}

pub fn engine() -> Engine {
    Engine::with_builtins(store(), locales())
}

/// Store whose every lookup fails.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn find_by_url(&self, _url: &str) -> anyhow::Result<Option<DocumentSummary>> {
        anyhow::bail!("connection refused")
    }

    async fn find_children(&self, _url: &str) -> anyhow::Result<Vec<DocumentSummary>> {
        anyhow::bail!("connection refused")
    }
}
