//! Client-side logic for the bookmarks collection.
//!
//! The collection is a paginated REST resource:
//!
//! | Request | Meaning |
//! |---------|---------|
//! | `GET  /api/v1/plus/bookmarks/?page=N` | one page of [`BookmarksData`] |
//! | `POST /api/v1/plus/bookmarks/?url=<url>` | toggle the bookmark for `url` |
//!
//! Nothing here talks to the network. This module only decides which
//! request to make next and how the listing is labelled, so it stays a set
//! of pure functions over the response data.

use serde::{Deserialize, Serialize};

use crate::document::Breadcrumb;
use crate::engine::MacroError;
use crate::macros::render_breadcrumbs;

pub const API_URL: &str = "/api/v1/plus/bookmarks/";

const PAGE_TITLE: &str = "My Bookmarks";

/// One saved document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkData {
    pub id: u64,
    pub url: String,
    pub title: String,
    /// Ancestors of the bookmarked document, root first
    #[serde(default)]
    pub parents: Vec<Breadcrumb>,
    /// Creation timestamp as sent by the server
    pub created: String,
}

impl BookmarkData {
    /// Breadcrumb list for this bookmark; empty when it has no parents.
    pub fn breadcrumbs_html(&self) -> Result<String, MacroError> {
        render_breadcrumbs(&self.parents)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarksMetadata {
    pub page: u32,
    pub total: u32,
    pub per_page: u32,
}

impl BookmarksMetadata {
    /// Last page holding any items, `ceil(total / per_page)`.
    pub fn max_page(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    /// Neighbouring pages worth linking to.
    pub fn pagination(&self) -> Pagination {
        Pagination {
            previous: self.page.checked_sub(1).filter(|&p| p > 0),
            next: self.page.checked_add(1).filter(|&p| p <= self.max_page()),
        }
    }
}

/// One page of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarksData {
    pub items: Vec<BookmarkData>,
    pub metadata: BookmarksMetadata,
    /// Token required by the toggle mutation
    #[serde(rename = "csrfmiddlewaretoken")]
    pub csrf_token: String,
}

impl BookmarksData {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Page to request after the current one ran empty.
    ///
    /// `None` while the page still has items or is already the first page.
    /// Page 2 steps back to the unpaginated view rather than `?page=1`.
    pub fn page_correction(&self) -> Option<PageRequest> {
        let page = self.metadata.page;
        if page <= 1 || !self.items.is_empty() {
            return None;
        }
        Some(match page {
            2 => PageRequest::Unpaginated,
            _ => PageRequest::Page(page - 1),
        })
    }

    /// Document title: `My Bookmarks (N) Page P`, with the parts that apply.
    pub fn page_title(&self) -> String {
        let meta = &self.metadata;
        if meta.total == 0 {
            return PAGE_TITLE.to_string();
        }
        let mut title = format!("{PAGE_TITLE} ({})", meta.total);
        if meta.page > 1 {
            title.push_str(&format!(" Page {}", meta.page));
        }
        title
    }

    /// The toggle request for `url`, carrying this page's csrf token.
    pub fn toggle_request(&self, url: &str) -> ToggleRequest {
        ToggleRequest {
            url: format!("{API_URL}?url={}", urlencoding::encode(url)),
            csrf_token: self.csrf_token.clone(),
        }
    }
}

/// Which page of the listing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// No `page` parameter at all
    Unpaginated,
    Page(u32),
}

impl PageRequest {
    fn from_page(page: u32) -> Self {
        match page {
            0 | 1 => Self::Unpaginated,
            page => Self::Page(page),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub previous: Option<u32>,
    pub next: Option<u32>,
}

impl Pagination {
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// `POST` that adds or removes one bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub url: String,
    pub csrf_token: String,
}

impl ToggleRequest {
    pub const METHOD: &'static str = "POST";

    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            ("X-CSRFToken", self.csrf_token.as_str()),
            ("Content-Type", "application/x-www-form-urlencoded"),
        ]
    }
}

/// Ordered query string parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parse `a=1&b=two`, with or without a leading `?`.
    pub fn parse(query: &str) -> Self {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();
        Self(pairs)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace every `key` with a single value, keeping the first position.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.0[index].1 = value;
                let mut seen = 0;
                self.0.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply a page choice to the `page` parameter.
    pub fn with_page(mut self, request: PageRequest) -> Self {
        match request {
            PageRequest::Unpaginated => self.remove("page"),
            PageRequest::Page(page) => self.set("page", page.to_string()),
        }
        self
    }

    /// Encoded query string, without the leading `?`.
    pub fn to_query(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.clone())
}

/// Api url for listing the collection with the current query.
pub fn list_url(params: &QueryParams) -> String {
    format!("{API_URL}?{}", params.to_query())
}

/// Link to `page` of the listing at `pathname`.
///
/// Page 1 drops the `page` parameter; other parameters are kept.
pub fn pagination_url(pathname: &str, params: &QueryParams, page: u32) -> String {
    let params = params.clone().with_page(PageRequest::from_page(page));
    if params.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{}", params.to_query())
    }
}
